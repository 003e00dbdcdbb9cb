mod common;

use approval_mapper::build_mapper;
use approval_mapper::domain::data::Employee;
use approval_mapper::domain::read_models::EmployeeEntity;
use common::{date, john_doe_employee};

#[test]
fn should_map_employee_to_employee_entity() {
    let mapper = build_mapper().unwrap();
    let employee = john_doe_employee();

    let entity: EmployeeEntity = mapper.map(&employee).unwrap();

    assert_eq!(entity.id, employee.employee_id);
    assert_eq!(entity.id, 9);
    assert_eq!(entity.first_name, "John");
    assert_eq!(entity.last_name, "Doe");
    assert_eq!(entity.email, "john.doe@gmail.com");
    assert_eq!(entity.date_of_birth, employee.date_of_birth.date());
    assert_eq!(entity.date_of_birth, date(2022, 2, 7));
    assert_eq!(entity.department_id, 2);
    assert_eq!(entity.department, "IT department");
}

#[test]
fn date_of_birth_drops_time_of_day() {
    let mapper = build_mapper().unwrap();
    let mut employee = john_doe_employee();
    employee.date_of_birth = date(1985, 12, 31).and_hms_opt(23, 59, 59).unwrap();

    let entity: EmployeeEntity = mapper.map(&employee).unwrap();

    assert_eq!(entity.date_of_birth, date(1985, 12, 31));
}

#[test]
fn mapping_is_deterministic() {
    let mapper = build_mapper().unwrap();

    let first: EmployeeEntity = mapper.map(&john_doe_employee()).unwrap();
    let second: EmployeeEntity = mapper.map(&john_doe_employee()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn maps_a_batch_in_order() {
    let mapper = build_mapper().unwrap();
    let mut jane = john_doe_employee();
    jane.employee_id = 10;
    jane.first_name = "Jane".to_string();

    let entities = mapper
        .map_all::<Employee, EmployeeEntity>(&[john_doe_employee(), jane])
        .unwrap();

    let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![9, 10]);
    assert_eq!(entities[1].first_name, "Jane");
}
