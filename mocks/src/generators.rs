//! Random test data generators using the fake crate
//!
//! Produces realistic task fixtures for populating mock repositories
//! in list and pagination tests.

use chrono::Utc;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use rand::Rng;
use todo_core::{Task, PRIORITY_MAX, PRIORITY_MIN};

/// Generate a realistic task title
pub fn generate_title() -> String {
    Sentence(2..6).fake()
}

/// Generate a realistic task description
pub fn generate_description() -> String {
    Paragraph(1..3).fake()
}

/// Generate a random priority within the valid range
pub fn generate_priority() -> i32 {
    rand::thread_rng().gen_range(PRIORITY_MIN..=PRIORITY_MAX)
}

/// Generate a random task with realistic data
pub fn generate_random_task(id: i64) -> Task {
    let mut rng = rand::thread_rng();
    Task {
        id,
        title: generate_title(),
        description: if rng.gen_bool(0.7) {
            Some(generate_description())
        } else {
            None
        },
        priority: generate_priority(),
        is_done: rng.gen_bool(0.3),
        created_at: Utc::now(),
        updated_at: None,
    }
}

/// Generate a batch of random tasks with sequential ids starting at 1
pub fn generate_task_batch(count: usize) -> Vec<Task> {
    (1..=count as i64).map(generate_random_task).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_priority_in_range() {
        for _ in 0..50 {
            let priority = generate_priority();
            assert!((PRIORITY_MIN..=PRIORITY_MAX).contains(&priority));
        }
    }

    #[test]
    fn test_batch_has_sequential_ids() {
        let batch = generate_task_batch(5);
        let ids: Vec<i64> = batch.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_generated_title_not_empty() {
        assert!(!generate_title().trim().is_empty());
    }
}
