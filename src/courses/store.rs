//! In-memory course store
//!
//! An ordered `Vec<Course>` behind one coarse `RwLock`. Lookups are linear
//! scans; the catalog is small. Mutations that remove then append (update)
//! take the write lock once so no reader sees the intermediate state.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::model::{seed_courses, Course};

/// The authoritative course collection
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
}

impl CourseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixture courses
    pub fn seeded() -> Self {
        Self::from_courses(seed_courses())
    }

    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self {
            courses: RwLock::new(courses),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<Course>>> {
        self.courses.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<Course>>> {
        self.courses.write().map_err(|_| StoreError::Poisoned)
    }

    /// All courses, oldest append first
    pub fn list_all(&self) -> StoreResult<Vec<Course>> {
        Ok(self.read()?.clone())
    }

    /// First course with the given id
    pub fn find_by_id(&self, id: &str) -> StoreResult<Option<Course>> {
        Ok(self.read()?.iter().find(|c| c.id == id).cloned())
    }

    /// Append a course. No validation or dedup.
    pub fn insert(&self, course: Course) -> StoreResult<()> {
        self.write()?.push(course);
        Ok(())
    }

    /// Remove the first course with the given id, returning it.
    /// A miss leaves the store untouched.
    pub fn remove_by_id(&self, id: &str) -> StoreResult<Option<Course>> {
        let mut courses = self.write()?;
        Ok(courses
            .iter()
            .position(|c| c.id == id)
            .map(|index| courses.remove(index)))
    }

    /// Replace the first course with the given id.
    ///
    /// The old entry is removed and `course` is appended with its id forced
    /// to `id`, so the replaced course moves to the end. Returns the stored
    /// course, or `None` without touching the store on a miss.
    pub fn replace(&self, id: &str, mut course: Course) -> StoreResult<Option<Course>> {
        let mut courses = self.write()?;
        let Some(index) = courses.iter().position(|c| c.id == id) else {
            return Ok(None);
        };
        courses.remove(index);
        course.id = id.to_string();
        courses.push(course.clone());
        Ok(Some(course))
    }

    /// Poison the lock by panicking while holding the write guard
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        std::thread::scope(|scope| {
            let _ = scope
                .spawn(|| {
                    let _guard = self.courses.write();
                    panic!("writer panicked while holding the course lock");
                })
                .join();
        });
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }
}
