//! The service facade

use arcanum_core::model::{Course, Creature, EntityId, Event, House, Student, Teacher};
use arcanum_store::{BackendConfig, ConnectionFactory, CrudRepository, Repository, Result};
use chrono::NaiveDate;

/// One repository per entity, all sharing a connection factory
#[derive(Debug, Clone)]
pub struct Service {
    factory: ConnectionFactory,
    houses: Repository<House>,
    teachers: Repository<Teacher>,
    courses: Repository<Course>,
    students: Repository<Student>,
    events: Repository<Event>,
    creatures: Repository<Creature>,
}

impl Service {
    pub fn new(factory: ConnectionFactory) -> Self {
        Self {
            houses: Repository::new(factory.clone()),
            teachers: Repository::new(factory.clone()),
            courses: Repository::new(factory.clone()),
            students: Repository::new(factory.clone()),
            events: Repository::new(factory.clone()),
            creatures: Repository::new(factory.clone()),
            factory,
        }
    }

    /// Connect a backend and build the facade over it
    pub fn connect(config: &BackendConfig) -> Result<Self> {
        ConnectionFactory::connect(config).map(Self::new)
    }

    /// Release the backend; later calls fail
    pub fn shutdown(&self) {
        self.factory.shutdown();
    }

    // Houses

    pub fn create_house(&self, house: &mut House) -> Result<()> {
        self.houses.create(house)
    }

    pub fn get_house(&self, id: EntityId) -> Result<Option<House>> {
        self.houses.get(id)
    }

    pub fn all_houses(&self) -> Result<Vec<House>> {
        self.houses.get_all()
    }

    pub fn update_house(&self, house: &mut House) -> Result<()> {
        self.houses.update(house)
    }

    pub fn delete_house(&self, house: &House) -> Result<()> {
        self.houses.delete(house)
    }

    pub fn first_house(&self) -> Result<House> {
        self.houses.first()
    }

    pub fn house_names_above_score(&self, threshold: i64) -> Result<Vec<String>> {
        self.houses.names_with_score_above(threshold)
    }

    pub fn update_house_score(&self, score: i64, name: &str) -> Result<usize> {
        self.houses.update_score_by_name(score, name)
    }

    // Teachers

    pub fn create_teacher(&self, teacher: &mut Teacher) -> Result<()> {
        self.teachers.create(teacher)
    }

    pub fn get_teacher(&self, id: EntityId) -> Result<Option<Teacher>> {
        self.teachers.get(id)
    }

    pub fn all_teachers(&self) -> Result<Vec<Teacher>> {
        self.teachers.get_all()
    }

    pub fn update_teacher(&self, teacher: &mut Teacher) -> Result<()> {
        self.teachers.update(teacher)
    }

    pub fn delete_teacher(&self, teacher: &Teacher) -> Result<()> {
        self.teachers.delete(teacher)
    }

    // Courses

    pub fn create_course(&self, course: &mut Course) -> Result<()> {
        self.courses.create(course)
    }

    pub fn get_course(&self, id: EntityId) -> Result<Option<Course>> {
        self.courses.get(id)
    }

    pub fn all_courses(&self) -> Result<Vec<Course>> {
        self.courses.get_all()
    }

    pub fn update_course(&self, course: &mut Course) -> Result<()> {
        self.courses.update(course)
    }

    pub fn delete_course(&self, course: &Course) -> Result<()> {
        self.courses.delete(course)
    }

    pub fn count_courses(&self) -> Result<i64> {
        self.courses.count()
    }

    pub fn courses_by_teacher(&self, teacher_id: EntityId) -> Result<Vec<Course>> {
        self.courses.by_teacher(teacher_id)
    }

    // Students

    pub fn create_student(&self, student: &mut Student) -> Result<()> {
        self.students.create(student)
    }

    pub fn get_student(&self, id: EntityId) -> Result<Option<Student>> {
        self.students.get(id)
    }

    pub fn all_students(&self) -> Result<Vec<Student>> {
        self.students.get_all()
    }

    pub fn update_student(&self, student: &mut Student) -> Result<()> {
        self.students.update(student)
    }

    pub fn delete_student(&self, student: &Student) -> Result<()> {
        self.students.delete(student)
    }

    pub fn student_names(&self) -> Result<Vec<String>> {
        self.students.names()
    }

    pub fn student_names_and_ages(&self) -> Result<Vec<(String, i64)>> {
        self.students.names_and_ages()
    }

    pub fn students_in_house(&self, house_id: EntityId) -> Result<Vec<Student>> {
        self.students.in_house(house_id)
    }

    pub fn average_student_age(&self) -> Result<f64> {
        self.students.average_age()
    }

    pub fn delete_students_named(&self, name: &str) -> Result<usize> {
        self.students.delete_by_name(name)
    }

    // Events

    pub fn create_event(&self, event: &mut Event) -> Result<()> {
        self.events.create(event)
    }

    pub fn get_event(&self, id: EntityId) -> Result<Option<Event>> {
        self.events.get(id)
    }

    pub fn all_events(&self) -> Result<Vec<Event>> {
        self.events.get_all()
    }

    pub fn update_event(&self, event: &mut Event) -> Result<()> {
        self.events.update(event)
    }

    pub fn delete_event(&self, event: &Event) -> Result<()> {
        self.events.delete(event)
    }

    pub fn events_at_location_by_date(&self, location: &str) -> Result<Vec<(String, NaiveDate)>> {
        self.events.at_location_by_date(location)
    }

    // Creatures

    pub fn create_creature(&self, creature: &mut Creature) -> Result<()> {
        self.creatures.create(creature)
    }

    pub fn get_creature(&self, id: EntityId) -> Result<Option<Creature>> {
        self.creatures.get(id)
    }

    pub fn all_creatures(&self) -> Result<Vec<Creature>> {
        self.creatures.get_all()
    }

    pub fn update_creature(&self, creature: &mut Creature) -> Result<()> {
        self.creatures.update(creature)
    }

    pub fn delete_creature(&self, creature: &Creature) -> Result<()> {
        self.creatures.delete(creature)
    }
}
