//! Configure-once, map-many object mapper.
//!
//! Rules are plain conversion functions registered per (source, destination)
//! type pair on a [`MapperConfiguration`]. Once every rule is in place the
//! configuration is validated and frozen into a [`Mapper`], which is cheap to
//! clone and can be shared across threads.

use crate::utils::error::{ApprovalError, Result};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

type MapFn<S, D> = dyn Fn(&S, &Mapper) -> Result<D> + Send + Sync;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TypePair {
    source: TypeId,
    destination: TypeId,
}

impl TypePair {
    fn of<S: 'static, D: 'static>() -> Self {
        Self {
            source: TypeId::of::<S>(),
            destination: TypeId::of::<D>(),
        }
    }
}

#[derive(Debug, Clone)]
struct Dependency {
    pair: TypePair,
    source_name: &'static str,
    destination_name: &'static str,
}

struct TypeMap {
    source_name: &'static str,
    destination_name: &'static str,
    // Always an `Arc<MapFn<S, D>>` for the pair this map is keyed under.
    rule: Box<dyn Any + Send + Sync>,
    requires: Vec<Dependency>,
}

/// A named group of mapping rules.
pub trait Profile {
    fn name(&self) -> &str;
    fn configure(&self, configuration: &mut MapperConfiguration);
}

#[derive(Default)]
pub struct MapperConfiguration {
    maps: HashMap<TypePair, TypeMap>,
    duplicates: Vec<(&'static str, &'static str)>,
}

impl MapperConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_profile<P: Profile>(&mut self, profile: P) -> &mut Self {
        tracing::debug!("Adding mapper profile '{}'", profile.name());
        profile.configure(self);
        self
    }

    /// Registers the rule producing a `D` from an `S`.
    ///
    /// The rule gets the finished [`Mapper`] so nested members can be mapped
    /// through their own rules. Registering the same pair twice is reported
    /// by [`assert_configuration_is_valid`](Self::assert_configuration_is_valid).
    pub fn create_map<S, D, F>(&mut self, rule: F) -> TypeMapBuilder<'_>
    where
        S: 'static,
        D: 'static,
        F: Fn(&S, &Mapper) -> Result<D> + Send + Sync + 'static,
    {
        let pair = TypePair::of::<S, D>();
        let source_name = type_name::<S>();
        let destination_name = type_name::<D>();

        if self.maps.contains_key(&pair) {
            self.duplicates.push((source_name, destination_name));
        }

        let rule: Arc<MapFn<S, D>> = Arc::new(rule);
        self.maps.insert(
            pair,
            TypeMap {
                source_name,
                destination_name,
                rule: Box::new(rule),
                requires: Vec::new(),
            },
        );

        TypeMapBuilder {
            configuration: self,
            pair,
        }
    }

    pub fn type_map_count(&self) -> usize {
        self.maps.len()
    }

    pub fn assert_configuration_is_valid(&self) -> Result<()> {
        if let Some(&(source_type, destination_type)) = self.duplicates.first() {
            return Err(ApprovalError::DuplicateMapError {
                source_type,
                destination_type,
            });
        }

        for type_map in self.maps.values() {
            for dependency in &type_map.requires {
                if !self.maps.contains_key(&dependency.pair) {
                    return Err(ApprovalError::UnsatisfiedDependencyError {
                        map: format!("{} -> {}", type_map.source_name, type_map.destination_name),
                        requires: format!(
                            "{} -> {}",
                            dependency.source_name, dependency.destination_name
                        ),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn create_mapper(self) -> Result<Mapper> {
        self.assert_configuration_is_valid()?;
        tracing::debug!("Mapper configuration valid with {} type maps", self.maps.len());
        Ok(Mapper {
            maps: Arc::new(self.maps),
        })
    }
}

pub struct TypeMapBuilder<'a> {
    configuration: &'a mut MapperConfiguration,
    pair: TypePair,
}

impl TypeMapBuilder<'_> {
    /// Declares that this rule maps nested `A` values into `B`.
    pub fn requires<A: 'static, B: 'static>(self) -> Self {
        if let Some(type_map) = self.configuration.maps.get_mut(&self.pair) {
            type_map.requires.push(Dependency {
                pair: TypePair::of::<A, B>(),
                source_name: type_name::<A>(),
                destination_name: type_name::<B>(),
            });
        }
        self
    }
}

#[derive(Clone)]
pub struct Mapper {
    maps: Arc<HashMap<TypePair, TypeMap>>,
}

impl Mapper {
    pub fn map<S: 'static, D: 'static>(&self, source: &S) -> Result<D> {
        let missing = || ApprovalError::MissingMapError {
            source_type: type_name::<S>(),
            destination_type: type_name::<D>(),
        };

        let type_map = self.maps.get(&TypePair::of::<S, D>()).ok_or_else(missing)?;
        let rule = type_map
            .rule
            .downcast_ref::<Arc<MapFn<S, D>>>()
            .ok_or_else(missing)?;

        tracing::trace!(
            "Mapping {} -> {}",
            type_map.source_name,
            type_map.destination_name
        );
        (**rule)(source, self)
    }

    pub fn map_all<S: 'static, D: 'static>(&self, sources: &[S]) -> Result<Vec<D>> {
        sources.iter().map(|source| self.map(source)).collect()
    }

    pub fn has_map<S: 'static, D: 'static>(&self) -> bool {
        self.maps.contains_key(&TypePair::of::<S, D>())
    }
}

impl std::fmt::Debug for Mapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pairs: Vec<String> = self
            .maps
            .values()
            .map(|m| format!("{} -> {}", m.source_name, m.destination_name))
            .collect();
        pairs.sort();
        f.debug_struct("Mapper").field("maps", &pairs).finish()
    }
}
