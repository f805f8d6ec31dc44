// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Driver session: a search context paired with a view and pacing settings.
//!
//! The session is the caller-owned object that ties a [`SearchContext`] to a
//! [`BoardView`]. It renders after each executed step, reports each new
//! result, and can run the search at a fixed interval or unpaced to the end. Nothing here is
//! global; two sessions never share state.

use std::io;
use std::thread;
use std::time::Duration;

use tracing::info;

use crate::context::{SearchConfig, SearchContext};
use crate::engine::StepResult;
use crate::view::BoardView;

/// Default delay between steps when running automatically.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(50);

/// Pacing and rendering settings for a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Delay between steps in [`Session::run`]; zero for none.
    pub interval: Duration,
    /// Stop [`Session::run`] after this many executed steps.
    pub max_steps: Option<u64>,
    /// Render the board after every step. When false only results are shown.
    pub render_steps: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            max_steps: None,
            render_steps: true,
        }
    }
}

/// What a call to [`Session::run`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Steps executed by this run.
    pub steps: u64,
    /// Result count at the end of the run.
    pub results: usize,
    /// True if the run ended because the search was exhausted.
    pub exhausted: bool,
}

/// A search in progress, shown through a view.
#[derive(Debug)]
pub struct Session<V: BoardView> {
    context: SearchContext,
    config: SessionConfig,
    view: V,
}

impl<V: BoardView> Session<V> {
    /// Start a session and show the initial board.
    pub fn new(search: SearchConfig, config: SessionConfig, view: V) -> io::Result<Self> {
        let mut session = Self {
            context: SearchContext::new(search),
            config,
            view,
        };
        session.show_initial()?;
        Ok(session)
    }

    fn show_initial(&mut self) -> io::Result<()> {
        if self.config.render_steps {
            self.view.render(&self.context.snapshot())?;
        }
        self.view.report_count(self.context.result_count())
    }

    pub fn context(&self) -> &SearchContext {
        &self.context
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.config.interval = interval;
    }

    /// Perform one step and show its effect.
    pub fn step_once(&mut self) -> io::Result<StepResult> {
        self.advance(self.config.render_steps)
    }

    fn advance(&mut self, render: bool) -> io::Result<StepResult> {
        let result = self.context.step();

        if result.is_executed() && render {
            self.view.render(&self.context.snapshot())?;
        }

        if result.is_solved() {
            let count = self.context.result_count();
            self.view.report_solution(&self.context.snapshot(), count)?;
            self.view.report_count(count)?;
        }

        Ok(result)
    }

    /// Step until the search is exhausted or `max_steps` is reached, sleeping
    /// `interval` between steps.
    pub fn run(&mut self) -> io::Result<RunSummary> {
        let mut steps = 0;

        loop {
            if self.config.max_steps.is_some_and(|max| steps >= max) {
                break;
            }

            if !self.step_once()?.is_executed() {
                break;
            }
            steps += 1;

            if !self.config.interval.is_zero() {
                thread::sleep(self.config.interval);
            }
        }

        Ok(self.finish(steps))
    }

    /// Step to exhaustion as fast as possible, then show the final board once.
    ///
    /// Results are reported as they are found. `interval` and `render_steps`
    /// are ignored; `max_steps` still applies.
    pub fn run_all(&mut self) -> io::Result<RunSummary> {
        let mut steps = 0;

        while !self.config.max_steps.is_some_and(|max| steps >= max) {
            if !self.advance(false)?.is_executed() {
                break;
            }
            steps += 1;
        }

        self.view.render(&self.context.snapshot())?;
        Ok(self.finish(steps))
    }

    fn finish(&self, steps: u64) -> RunSummary {
        let summary = RunSummary {
            steps,
            results: self.context.result_count(),
            exhausted: self.context.is_exhausted(),
        };
        info!(
            steps = summary.steps,
            results = summary.results,
            exhausted = summary.exhausted,
            "run finished"
        );
        summary
    }

    /// Replace the search with a fresh one under `search` and show it.
    pub fn reset(&mut self, search: SearchConfig) -> io::Result<()> {
        self.context = SearchContext::new(search);
        self.show_initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::GridSnapshot;

    /// View that records what it was asked to show.
    #[derive(Debug, Default)]
    struct RecordingView {
        renders: usize,
        solutions: Vec<usize>,
        counts: Vec<usize>,
    }

    impl BoardView for RecordingView {
        fn render(&mut self, _snapshot: &GridSnapshot) -> io::Result<()> {
            self.renders += 1;
            Ok(())
        }

        fn report_solution(&mut self, snapshot: &GridSnapshot, count: usize) -> io::Result<()> {
            assert_eq!(snapshot.queens().len(), snapshot.size());
            self.solutions.push(count);
            Ok(())
        }

        fn report_count(&mut self, count: usize) -> io::Result<()> {
            self.counts.push(count);
            Ok(())
        }
    }

    fn quick() -> SessionConfig {
        SessionConfig {
            interval: Duration::ZERO,
            ..SessionConfig::default()
        }
    }

    #[test]
    fn test_new_session_shows_initial_board() {
        let session = Session::new(
            SearchConfig::new(4, false).unwrap(),
            quick(),
            RecordingView::default(),
        )
        .unwrap();
        assert_eq!(session.view().renders, 1);
        assert_eq!(session.view().counts, vec![0]);
    }

    #[test]
    fn test_run_to_exhaustion() {
        let mut session = Session::new(
            SearchConfig::new(5, false).unwrap(),
            quick(),
            RecordingView::default(),
        )
        .unwrap();
        let summary = session.run().unwrap();
        assert!(summary.exhausted);
        assert_eq!(summary.results, 10);

        let view = session.into_view();
        assert_eq!(view.solutions, (1..=10).collect::<Vec<_>>());
        assert_eq!(view.renders as u64, summary.steps + 1);
        assert_eq!(view.counts.len(), 11);
    }

    #[test]
    fn test_max_steps() {
        let config = SessionConfig {
            max_steps: Some(5),
            ..quick()
        };
        let mut session = Session::new(
            SearchConfig::new(8, false).unwrap(),
            config,
            RecordingView::default(),
        )
        .unwrap();
        let summary = session.run().unwrap();
        assert_eq!(summary.steps, 5);
        assert!(!summary.exhausted);
        assert_eq!(session.context().statistics().get(crate::state::Counters::Steps), 5);
    }

    #[test]
    fn test_solutions_only() {
        let config = SessionConfig {
            render_steps: false,
            ..quick()
        };
        let mut session = Session::new(
            SearchConfig::new(4, true).unwrap(),
            config,
            RecordingView::default(),
        )
        .unwrap();
        session.run().unwrap();
        assert_eq!(session.view().renders, 0);
        assert_eq!(session.view().solutions, vec![1]);
    }

    #[test]
    fn test_run_all_renders_final_board_once() {
        let config = SessionConfig {
            interval: Duration::from_secs(60),
            ..SessionConfig::default()
        };
        let mut session = Session::new(
            SearchConfig::new(6, false).unwrap(),
            config,
            RecordingView::default(),
        )
        .unwrap();
        assert_eq!(session.view().renders, 1);

        let summary = session.run_all().unwrap();
        assert!(summary.exhausted);
        assert_eq!(summary.results, 4);
        assert_eq!(session.view().renders, 2);
        assert_eq!(session.view().solutions, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_run_all_respects_max_steps() {
        let config = SessionConfig {
            max_steps: Some(10),
            render_steps: false,
            ..SessionConfig::default()
        };
        let mut session = Session::new(
            SearchConfig::new(8, true).unwrap(),
            config,
            RecordingView::default(),
        )
        .unwrap();
        let summary = session.run_all().unwrap();
        assert_eq!(summary.steps, 10);
        assert!(!summary.exhausted);
        assert_eq!(session.view().renders, 1);
    }

    #[test]
    fn test_reset_replaces_context() {
        let mut session = Session::new(
            SearchConfig::new(4, false).unwrap(),
            quick(),
            RecordingView::default(),
        )
        .unwrap();
        session.run().unwrap();
        assert_eq!(session.context().result_count(), 2);

        session.reset(SearchConfig::new(6, true).unwrap()).unwrap();
        assert_eq!(session.context().board_size(), 6);
        assert_eq!(session.context().result_count(), 0);
        assert!(!session.context().is_exhausted());

        session.set_interval(Duration::ZERO);
        let summary = session.run().unwrap();
        assert_eq!(summary.results, 1);
    }
}
