use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use prognos_core::{
    Cadence, CanonicalFrame, FittedModel, ForecastModel, ModelOptions, PredictionFrame,
    PrognosError, TemporalKeyKind,
};

use crate::MeanFit;

/// Instruction for how a call should behave.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Fail immediately with the provided error.
    Fail(PrognosError),
    /// Hang indefinitely (simulate a stalled backend).
    Hang,
}

/// Scripted prediction: receives the fit the handle came from and the
/// requested timestamps.
pub type PredictFn =
    Arc<dyn Fn(&FitCall, &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError> + Send + Sync>;

/// One recorded `fit` call.
#[derive(Debug, Clone, PartialEq)]
pub struct FitCall {
    /// Frame handed to the model.
    pub frame: CanonicalFrame,
    /// Options handed to the model.
    pub options: ModelOptions,
}

/// One recorded `make_future` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FutureCall {
    /// Number of steps requested.
    pub periods: usize,
    /// Whether history was requested too.
    pub include_history: bool,
    /// Cadence requested.
    pub cadence: Cadence,
    /// Calendar the steps were taken in.
    pub calendar: TemporalKeyKind,
}

#[derive(Clone)]
enum PredictRule {
    Behavior(MockBehavior<PredictionFrame>),
    Script(PredictFn),
}

#[derive(Default)]
struct InternalState {
    fit_rule: Option<MockBehavior<()>>,
    predict_rule: Option<PredictRule>,
    fit_calls: Vec<FitCall>,
    future_calls: Vec<FutureCall>,
    predict_calls: Vec<Vec<DateTime<Utc>>>,
}

// Locks are never held across an await, so a poisoned lock only means a
// test panicked mid-update; the log is still usable.
fn lock(state: &Mutex<InternalState>) -> MutexGuard<'_, InternalState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior of `fit`. `Return(())` fits the mean model.
    pub fn set_fit_behavior(&self, behavior: MockBehavior<()>) {
        lock(&self.state).fit_rule = Some(behavior);
    }

    /// Set the behavior of `predict` on every handle, existing or future.
    pub fn set_predict_behavior(&self, behavior: MockBehavior<PredictionFrame>) {
        lock(&self.state).predict_rule = Some(PredictRule::Behavior(behavior));
    }

    /// Compute predictions with `f` instead of the mean model.
    pub fn set_predict_fn<F>(&self, f: F)
    where
        F: Fn(&FitCall, &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError>
            + Send
            + Sync
            + 'static,
    {
        lock(&self.state).predict_rule = Some(PredictRule::Script(Arc::new(f)));
    }

    /// Copy of the recorded `fit` calls, oldest first.
    #[must_use]
    pub fn fit_calls(&self) -> Vec<FitCall> {
        lock(&self.state).fit_calls.clone()
    }

    /// Copy of the recorded `make_future` calls, oldest first.
    #[must_use]
    pub fn future_calls(&self) -> Vec<FutureCall> {
        lock(&self.state).future_calls.clone()
    }

    /// Copy of the timestamps of every `predict` call, oldest first.
    #[must_use]
    pub fn predict_calls(&self) -> Vec<Vec<DateTime<Utc>>> {
        lock(&self.state).predict_calls.clone()
    }

    /// Clear all configured behaviors and call logs.
    pub fn clear_all(&self) {
        *lock(&self.state) = InternalState::default();
    }
}

/// A model that defers its behavior to an external controller.
///
/// Without configured behaviors it acts like [`MockModel`](crate::MockModel).
pub struct DynamicMockModel {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockModel {
    /// Create a new dynamic mock model and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ForecastModel>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ForecastModel>, controller)
    }
}

#[async_trait]
impl ForecastModel for DynamicMockModel {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fit(
        &self,
        frame: CanonicalFrame,
        options: ModelOptions,
    ) -> Result<Box<dyn FittedModel>, PrognosError> {
        let call = FitCall { frame, options };
        // Log the call and take a behavior snapshot in one critical section.
        let behavior = {
            let mut guard = lock(&self.state);
            guard.fit_calls.push(call.clone());
            guard.fit_rule.clone()
        };

        match behavior {
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            Some(MockBehavior::Return(())) | None => {
                let mean = MeanFit::fit(&call.frame, call.options)?;
                Ok(Box::new(DynamicFit {
                    call,
                    mean,
                    state: Arc::clone(&self.state),
                }))
            }
        }
    }
}

struct DynamicFit {
    call: FitCall,
    mean: MeanFit,
    state: Arc<Mutex<InternalState>>,
}

#[async_trait]
impl FittedModel for DynamicFit {
    fn history(&self) -> &[DateTime<Utc>] {
        self.mean.history()
    }

    fn make_future(
        &self,
        periods: usize,
        include_history: bool,
        cadence: Cadence,
        calendar: TemporalKeyKind,
    ) -> Result<Vec<DateTime<Utc>>, PrognosError> {
        lock(&self.state).future_calls.push(FutureCall {
            periods,
            include_history,
            cadence,
            calendar,
        });
        prognos_core::make_future(self.history(), periods, include_history, cadence, calendar)
    }

    async fn predict(&self, timestamps: &[DateTime<Utc>]) -> Result<PredictionFrame, PrognosError> {
        let rule = {
            let mut guard = lock(&self.state);
            guard.predict_calls.push(timestamps.to_vec());
            guard.predict_rule.clone()
        };

        match rule {
            Some(PredictRule::Script(f)) => f(&self.call, timestamps),
            Some(PredictRule::Behavior(MockBehavior::Return(frame))) => Ok(frame),
            Some(PredictRule::Behavior(MockBehavior::Fail(e))) => Err(e),
            Some(PredictRule::Behavior(MockBehavior::Hang)) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Ok(self.mean.predict_at(timestamps)),
        }
    }
}
