#![allow(dead_code)]

use arcanum_core::model::{Course, Creature, Event, House, Student, Teacher};
use arcanum_store::{BackendConfig, ConnectionFactory, Repository};
use chrono::NaiveDate;

/// A fresh, isolated in-memory backend
pub fn setup_factory() -> ConnectionFactory {
    ConnectionFactory::connect(&BackendConfig::in_memory())
        .expect("Failed to connect in-memory backend")
}

pub fn repo<T>(factory: &ConnectionFactory) -> Repository<T> {
    Repository::new(factory.clone())
}

pub fn gryffindor() -> House {
    House::new("Gryffindor", "Courage", 100)
}

pub fn slytherin() -> House {
    House::new("Slytherin", "Ambition", 120)
}

pub fn harry() -> Student {
    Student::new("Harry Potter", 14, "Intermediate", "Holly, phoenix feather")
}

pub fn hermione() -> Student {
    Student::new("Hermione Granger", 15, "Advanced", "Vine, dragon heartstring")
}

pub fn draco() -> Student {
    Student::new("Draco Malfoy", 13, "Intermediate", "Hawthorn, unicorn hair")
}

pub fn dumbledore() -> Teacher {
    Teacher::new("Albus Dumbledore", "Transfiguration", "Expert", 50)
}

pub fn snape() -> Teacher {
    Teacher::new("Severus Snape", "Potions", "Expert", 25)
}

pub fn defence() -> Course {
    Course::new("Defence Against the Dark Arts", "Advanced", 6)
}

pub fn potions() -> Course {
    Course::new("Potions", "Intermediate", 6)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn triwizard() -> Event {
    Event::new(
        "Triwizard Tournament",
        "First task",
        date(1994, 11, 24),
        "Hogwarts",
    )
}

pub fn hippogriff() -> Creature {
    Creature::new("Buckbeak", "Hippogriff", "Proud and loyal", "Forbidden Forest")
}
