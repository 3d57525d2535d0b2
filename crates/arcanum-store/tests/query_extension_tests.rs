// Integration tests for the entity-specific query extensions

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use arcanum_core::errors::ExErrorKind;
use arcanum_core::model::{Course, Event, House, Student, Teacher};
use arcanum_store::CrudRepository;
use common::*;

#[test]
fn test_names_with_score_above_is_strict() {
    // Given: Houses scoring 49, 120 and 100
    let factory = setup_factory();
    let houses = repo::<House>(&factory);
    for (name, score) in [("A", 49), ("B", 120), ("C", 100)] {
        houses
            .create(&mut House::new(name, "Motto", score))
            .unwrap();
    }

    // When/Then: Only houses strictly above 50 are returned
    assert_eq!(houses.names_with_score_above(50).unwrap(), vec!["B", "C"]);
    assert_eq!(houses.names_with_score_above(100).unwrap(), vec!["B"]);
    assert!(houses.names_with_score_above(120).unwrap().is_empty());
}

#[test]
fn test_update_score_by_name() {
    let factory = setup_factory();
    let houses = repo::<House>(&factory);
    let mut house = gryffindor();
    houses.create(&mut house).unwrap();

    let changed = houses.update_score_by_name(250, "Gryffindor").unwrap();

    assert_eq!(changed, 1);
    let loaded = houses.get(house.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.total_score, 250);
}

#[test]
fn test_update_score_for_unknown_name_changes_nothing() {
    let factory = setup_factory();
    let houses = repo::<House>(&factory);
    let mut house = gryffindor();
    houses.create(&mut house).unwrap();

    let changed = houses.update_score_by_name(999, "Durmstrang").unwrap();

    assert_eq!(changed, 0);
    assert_eq!(houses.first().unwrap().total_score, 100);
}

#[test]
fn test_student_projections() {
    let factory = setup_factory();
    let students = repo::<Student>(&factory);
    for mut student in [harry(), hermione(), draco()] {
        students.create(&mut student).unwrap();
    }

    assert_eq!(
        students.names().unwrap(),
        vec!["Harry Potter", "Hermione Granger", "Draco Malfoy"]
    );
    assert_eq!(
        students.names_and_ages().unwrap(),
        vec![
            ("Harry Potter".to_string(), 14),
            ("Hermione Granger".to_string(), 15),
            ("Draco Malfoy".to_string(), 13),
        ]
    );
}

#[test]
fn test_students_in_house() {
    let factory = setup_factory();
    let houses = repo::<House>(&factory);
    let mut lions = gryffindor();
    lions.admit(harry());
    lions.admit(hermione());
    houses.create(&mut lions).unwrap();
    let mut snakes = slytherin();
    snakes.admit(draco());
    houses.create(&mut snakes).unwrap();

    let students = repo::<Student>(&factory);
    assert_eq!(
        students.in_house(lions.id.unwrap()).unwrap(),
        vec![harry(), hermione()]
    );
    assert_eq!(students.in_house(snakes.id.unwrap()).unwrap(), vec![draco()]);
    assert!(students.in_house(12345).unwrap().is_empty());
}

#[test]
fn test_average_age() {
    let factory = setup_factory();
    let students = repo::<Student>(&factory);
    for mut student in [harry(), hermione(), draco()] {
        students.create(&mut student).unwrap();
    }

    let average = students.average_age().unwrap();

    assert!((average - 14.0).abs() < f64::EPSILON);
}

#[test]
fn test_average_age_over_no_students_is_empty_aggregate() {
    let factory = setup_factory();

    let err = repo::<Student>(&factory).average_age().unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::EmptyAggregate);
    assert_eq!(err.code(), "ERR_EMPTY_AGGREGATE");
}

#[test]
fn test_delete_by_name_removes_exactly_that_student() {
    // Given: Three students enrolled in a course
    let factory = setup_factory();
    let students = repo::<Student>(&factory);
    let courses = repo::<Course>(&factory);
    let mut created = vec![harry(), hermione(), draco()];
    for student in created.iter_mut() {
        students.create(student).unwrap();
    }
    let mut course = potions();
    course.student_ids = created.iter().map(|s| s.id.unwrap()).collect();
    courses.create(&mut course).unwrap();

    // When: One is deleted by name
    let removed = students.delete_by_name("Draco Malfoy").unwrap();

    // Then: Only that student (and its enrollment) is gone
    assert_eq!(removed, 1);
    assert_eq!(students.names().unwrap(), vec!["Harry Potter", "Hermione Granger"]);
    let course = courses.get(course.id.unwrap()).unwrap().unwrap();
    assert_eq!(course.student_ids.len(), 2);
    assert!(!course.student_ids.contains(&created[2].id.unwrap()));

    assert_eq!(students.delete_by_name("Draco Malfoy").unwrap(), 0);
}

#[test]
fn test_failed_score_update_rolls_back_and_reports() {
    // Given: Two houses sharing a name, and a trigger that vetoes the second update
    let factory = setup_factory();
    let houses = repo::<House>(&factory);
    let mut first = gryffindor();
    let mut second = gryffindor();
    houses.create(&mut first).unwrap();
    houses.create(&mut second).unwrap();
    let veto = format!(
        "CREATE TRIGGER freeze_scores BEFORE UPDATE ON houses WHEN OLD.id = {}
         BEGIN SELECT RAISE(ABORT, 'scores are frozen'); END;",
        second.id.unwrap()
    );
    factory.open().unwrap().execute_batch(&veto).unwrap();

    // When: Both are updated by name
    let err = houses.update_score_by_name(250, "Gryffindor").unwrap_err();

    // Then: The failure surfaces and neither row changed
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.to_string().contains("scores are frozen"));
    for house in houses.get_all().unwrap() {
        assert_eq!(house.total_score, 100);
    }
}

#[test]
fn test_failed_delete_by_name_rolls_back_and_reports() {
    // Given: Two students sharing a name, and a trigger that vetoes deleting the second
    let factory = setup_factory();
    let students = repo::<Student>(&factory);
    let mut created = vec![harry(), draco(), draco()];
    for student in created.iter_mut() {
        students.create(student).unwrap();
    }
    let veto = format!(
        "CREATE TRIGGER keep_students BEFORE DELETE ON students WHEN OLD.id = {}
         BEGIN SELECT RAISE(ABORT, 'students are protected'); END;",
        created[2].id.unwrap()
    );
    factory.open().unwrap().execute_batch(&veto).unwrap();

    // When
    let err = students.delete_by_name("Draco Malfoy").unwrap_err();

    // Then: Every student is still stored
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(students.count().unwrap(), 3);
    assert_eq!(
        students.names().unwrap(),
        vec!["Harry Potter", "Draco Malfoy", "Draco Malfoy"]
    );
}

#[test]
fn test_count_and_courses_by_teacher() {
    let factory = setup_factory();
    let teachers = repo::<Teacher>(&factory);
    let courses = repo::<Course>(&factory);
    let mut severus = snape();
    severus.assign_course(potions());
    teachers.create(&mut severus).unwrap();
    let mut albus = dumbledore();
    albus.assign_course(defence());
    teachers.create(&mut albus).unwrap();
    courses.create(&mut Course::new("Herbology", "Beginner", 4)).unwrap();

    assert_eq!(courses.count().unwrap(), 3);
    assert_eq!(courses.by_teacher(severus.id.unwrap()).unwrap(), vec![potions()]);
    assert_eq!(courses.by_teacher(albus.id.unwrap()).unwrap(), vec![defence()]);
}

#[test]
fn test_events_at_location_ordered_by_date() {
    let factory = setup_factory();
    let events = repo::<Event>(&factory);
    let schedule = [
        ("Yule Ball", date(1994, 12, 25), "Hogwarts"),
        ("First Task", date(1994, 11, 24), "Hogwarts"),
        ("Quidditch World Cup", date(1994, 8, 22), "Dartmoor"),
        ("Second Task", date(1995, 2, 24), "Hogwarts"),
    ];
    for (name, when, location) in schedule {
        events
            .create(&mut Event::new(name, "Tournament year", when, location))
            .unwrap();
    }

    let at_hogwarts = events.at_location_by_date("Hogwarts").unwrap();

    assert_eq!(
        at_hogwarts,
        vec![
            ("First Task".to_string(), date(1994, 11, 24)),
            ("Yule Ball".to_string(), date(1994, 12, 25)),
            ("Second Task".to_string(), date(1995, 2, 24)),
        ]
    );
    assert!(events.at_location_by_date("Beauxbatons").unwrap().is_empty());
}
