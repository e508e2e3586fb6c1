//! Scripted catalog workflow run by the driver executable.
//!
//! # Responsibility
//! - Seed a store, transform, merge down to a threshold, then transform random
//!   books until complexity reaches a target.
//! - Log progress at every step.
//!
//! # Invariants
//! - The optimization loop is bounded by `max_optimization_rounds`.
//! - Randomness comes only from the caller-provided RNG.

use crate::repo::book_repo::BookRepository;
use crate::service::book_service::{BookService, ServiceResult};
use log::{info, warn};
use rand::Rng;

const ISBN_SUFFIX_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ISBN_SUFFIX_LEN: usize = 6;

/// Tunables of the scripted workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowConfig {
    pub initial_books: usize,
    pub transformation_intensity: u32,
    /// Merging stops once the store holds at most this many books.
    pub merge_threshold: usize,
    /// Optimization stops once complexity reaches this value.
    pub optimization_threshold: u64,
    pub max_optimization_rounds: usize,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            initial_books: 10,
            transformation_intensity: 7,
            merge_threshold: 5,
            optimization_threshold: 20,
            max_optimization_rounds: 10_000,
        }
    }
}

/// Outcome of one workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowReport {
    pub initial_complexity: u64,
    pub final_complexity: u64,
    pub merges: usize,
    pub optimization_rounds: usize,
    pub books_remaining: usize,
}

impl WorkflowReport {
    /// Whether the final complexity reached the configured threshold.
    pub fn reached_threshold(&self, config: &WorkflowConfig) -> bool {
        self.final_complexity >= config.optimization_threshold
    }
}

/// Runs the scripted workflow against `service`.
///
/// # Errors
/// - Propagates the first persistence failure; earlier steps stay applied.
pub fn run_workflow<R, G>(
    service: &mut BookService<R>,
    config: &WorkflowConfig,
    rng: &mut G,
) -> ServiceResult<WorkflowReport>
where
    R: BookRepository,
    G: Rng,
{
    info!("event=workflow_start module=workflow status=start");

    for index in 0..config.initial_books {
        service.create_book(
            format!("Book {index}"),
            format!("Author {index}"),
            format!("ISBN-{index}-{}", random_isbn_suffix(rng)),
        )?;
    }

    let seeded_ids: Vec<String> = service.books().iter().map(|book| book.id.clone()).collect();
    for id in seeded_ids.iter().step_by(2) {
        service.transform_book(id, config.transformation_intensity)?;
    }
    info!(
        "event=workflow_seed module=workflow status=ok count={}",
        service.len()
    );

    let mut merges = 0;
    // A merge needs two books.
    while service.len() > config.merge_threshold.max(1) {
        let first = service.books()[0].id.clone();
        let second = service.books()[1].id.clone();
        info!("event=workflow_merge module=workflow status=start first={first} second={second}");
        if service.merge_books(&first, &second)?.is_some() {
            merges += 1;
        }
    }

    let initial_complexity = service.calculate_complexity();
    info!("event=workflow_complexity module=workflow status=initial complexity={initial_complexity}");

    let mut complexity = initial_complexity;
    let mut rounds = 0;
    while complexity < config.optimization_threshold && !service.is_empty() {
        if rounds >= config.max_optimization_rounds {
            warn!(
                "event=workflow_optimize module=workflow status=aborted rounds={rounds} complexity={complexity}"
            );
            break;
        }
        let index = rng.gen_range(0..service.len());
        let id = service.books()[index].id.clone();
        service.transform_book(&id, config.transformation_intensity)?;
        complexity = service.calculate_complexity();
        rounds += 1;
        info!("event=workflow_optimize module=workflow status=ok round={rounds} complexity={complexity}");
    }

    info!(
        "event=workflow_done module=workflow status=ok books={} complexity={complexity}",
        service.len()
    );
    Ok(WorkflowReport {
        initial_complexity,
        final_complexity: complexity,
        merges,
        optimization_rounds: rounds,
        books_remaining: service.len(),
    })
}

fn random_isbn_suffix<G: Rng>(rng: &mut G) -> String {
    (0..ISBN_SUFFIX_LEN)
        .map(|_| char::from(ISBN_SUFFIX_ALPHABET[rng.gen_range(0..ISBN_SUFFIX_ALPHABET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{random_isbn_suffix, ISBN_SUFFIX_LEN};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn isbn_suffix_is_lowercase_base36() {
        let mut rng = StdRng::seed_from_u64(7);
        let suffix = random_isbn_suffix(&mut rng);
        assert_eq!(suffix.len(), ISBN_SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }
}
