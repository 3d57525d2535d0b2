// End-to-end tests through the service facade

#![allow(clippy::unwrap_used, clippy::expect_used)]

use arcanum_core::errors::ExErrorKind;
use arcanum_core::model::{link, Course, Creature, Event, House, Student, Teacher};
use arcanum_service::Service;
use arcanum_store::BackendConfig;
use chrono::NaiveDate;

fn setup_service() -> Service {
    Service::connect(&BackendConfig::in_memory()).expect("Failed to connect service")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_school_year_walkthrough() {
    // Given: Two houses with students and a teacher with courses
    let service = setup_service();

    let mut gryffindor = House::new("Gryffindor", "Courage", 100);
    gryffindor.admit(Student::new("Harry Potter", 14, "Intermediate", "Holly"));
    gryffindor.admit(Student::new("Hermione Granger", 15, "Advanced", "Vine"));
    service.create_house(&mut gryffindor).unwrap();

    let mut slytherin = House::new("Slytherin", "Ambition", 120);
    slytherin.admit(Student::new("Draco Malfoy", 13, "Intermediate", "Hawthorn"));
    service.create_house(&mut slytherin).unwrap();

    let mut snape = Teacher::new("Severus Snape", "Potions", "Expert", 25);
    snape.assign_course(Course::new("Potions", "Intermediate", 6));
    link::appoint_head(&mut slytherin, &mut snape).unwrap();
    service.create_teacher(&mut snape).unwrap();

    // Then: Every query sees the same world
    assert_eq!(service.first_house().unwrap(), gryffindor);
    assert_eq!(
        service.house_names_above_score(110).unwrap(),
        vec!["Slytherin"]
    );
    assert_eq!(service.student_names().unwrap().len(), 3);
    assert_eq!(
        service.students_in_house(slytherin.id.unwrap()).unwrap(),
        vec![Student::new("Draco Malfoy", 13, "Intermediate", "Hawthorn")]
    );
    assert!((service.average_student_age().unwrap() - 14.0).abs() < f64::EPSILON);
    assert_eq!(service.count_courses().unwrap(), 1);
    assert_eq!(service.courses_by_teacher(snape.id.unwrap()).unwrap().len(), 1);
    assert_eq!(
        service.get_house(slytherin.id.unwrap()).unwrap().unwrap().head_teacher_id,
        snape.id
    );

    // When: Scores change and a student leaves
    assert_eq!(service.update_house_score(150, "Gryffindor").unwrap(), 1);
    assert_eq!(service.delete_students_named("Draco Malfoy").unwrap(), 1);

    // Then: The changes are visible
    assert_eq!(
        service.get_house(gryffindor.id.unwrap()).unwrap().unwrap().total_score,
        150
    );
    assert_eq!(
        service.student_names_and_ages().unwrap(),
        vec![
            ("Harry Potter".to_string(), 14),
            ("Hermione Granger".to_string(), 15)
        ]
    );
}

#[test]
fn test_events_and_creatures_through_facade() {
    let service = setup_service();
    let mut buckbeak = Creature::new("Buckbeak", "Hippogriff", "Proud", "Forbidden Forest");
    service.create_creature(&mut buckbeak).unwrap();

    let mut first_task = Event::new("First Task", "Dragons", date(1994, 11, 24), "Hogwarts");
    let mut yule_ball = Event::new("Yule Ball", "Dance", date(1994, 12, 25), "Hogwarts");
    service.create_event(&mut yule_ball).unwrap();
    service.create_event(&mut first_task).unwrap();
    link::register_creature(&mut first_task, &mut buckbeak).unwrap();
    service.update_event(&mut first_task).unwrap();

    assert_eq!(
        service.events_at_location_by_date("Hogwarts").unwrap(),
        vec![
            ("First Task".to_string(), date(1994, 11, 24)),
            ("Yule Ball".to_string(), date(1994, 12, 25)),
        ]
    );
    let stored = service.get_creature(buckbeak.id.unwrap()).unwrap().unwrap();
    assert!(stored.event_ids.contains(&first_task.id.unwrap()));

    service.delete_event(&first_task).unwrap();
    assert_eq!(service.all_events().unwrap(), vec![yule_ball]);
    assert_eq!(service.all_creatures().unwrap().len(), 1);
}

#[test]
fn test_crud_for_each_entity() {
    let service = setup_service();

    let mut course = Course::new("Herbology", "Beginner", 4);
    service.create_course(&mut course).unwrap();
    course.duration_hours = 5;
    service.update_course(&mut course).unwrap();
    assert_eq!(
        service.get_course(course.id.unwrap()).unwrap().unwrap().duration_hours,
        5
    );
    assert_eq!(service.all_courses().unwrap().len(), 1);
    service.delete_course(&course).unwrap();
    assert!(service.get_course(course.id.unwrap()).unwrap().is_none());

    let mut neville = Student::new("Neville Longbottom", 14, "Beginner", "Cherry");
    service.create_student(&mut neville).unwrap();
    neville.magic_level = "Intermediate".to_string();
    service.update_student(&mut neville).unwrap();
    assert_eq!(
        service.get_student(neville.id.unwrap()).unwrap().unwrap().magic_level,
        "Intermediate"
    );
    assert_eq!(service.all_students().unwrap(), vec![neville.clone()]);
    service.delete_student(&neville).unwrap();

    let mut albus = Teacher::new("Albus Dumbledore", "Transfiguration", "Expert", 50);
    service.create_teacher(&mut albus).unwrap();
    albus.years_of_experience = 51;
    service.update_teacher(&mut albus).unwrap();
    assert_eq!(service.all_teachers().unwrap(), vec![albus.clone()]);
    service.delete_teacher(&albus).unwrap();
    assert!(service.get_teacher(albus.id.unwrap()).unwrap().is_none());

    let mut house = House::new("Hufflepuff", "Loyalty", 80);
    service.create_house(&mut house).unwrap();
    house.motto = "Hard work".to_string();
    service.update_house(&mut house).unwrap();
    assert_eq!(service.all_houses().unwrap(), vec![house.clone()]);
    service.delete_house(&house).unwrap();
    assert!(service.all_houses().unwrap().is_empty());

    let mut phoenix = Creature::new("Fawkes", "Phoenix", "Loyal", "Headmaster's office");
    service.create_creature(&mut phoenix).unwrap();
    phoenix.habitat = "Hogwarts".to_string();
    service.update_creature(&mut phoenix).unwrap();
    assert_eq!(
        service.get_creature(phoenix.id.unwrap()).unwrap().unwrap().habitat,
        "Hogwarts"
    );
    service.delete_creature(&phoenix).unwrap();
}

#[test]
fn test_errors_pass_through_unchanged() {
    let service = setup_service();

    let err = service.average_student_age().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::EmptyAggregate);

    let err = service.first_house().unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::NotFound);

    let mut ghost = Event::new("Ghost", "None", date(2000, 1, 1), "Nowhere");
    ghost.id = Some(31);
    assert_eq!(
        service.update_event(&mut ghost).unwrap_err().kind(),
        ExErrorKind::NotFound
    );
    assert_eq!(service.update_house_score(1, "Nobody").unwrap(), 0);

    service.shutdown();
    assert_eq!(
        service.all_houses().unwrap_err().kind(),
        ExErrorKind::Persistence
    );
}
