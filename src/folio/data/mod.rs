//! # Static Datasets
//!
//! The three catalogs and the search registry are authored here as literal data and
//! exposed as read-only slices. They are built once on first access and never mutated;
//! every query produces a new list.

mod books;
mod cards;
mod course_files;
mod search_registry;

use crate::model::{Book, Card, CourseFile, SearchItem};
use once_cell::sync::Lazy;

static BOOKS: Lazy<Vec<Book>> = Lazy::new(books::all);
static CARDS: Lazy<Vec<Card>> = Lazy::new(cards::all);
static COURSE_FILES: Lazy<Vec<CourseFile>> = Lazy::new(course_files::all);
static SEARCH_REGISTRY: Lazy<Vec<SearchItem>> = Lazy::new(search_registry::all);

pub fn books() -> &'static [Book] {
    &BOOKS
}

pub fn cards() -> &'static [Card] {
    &CARDS
}

pub fn course_files() -> &'static [CourseFile] {
    &COURSE_FILES
}

pub fn search_registry() -> &'static [SearchItem] {
    &SEARCH_REGISTRY
}
