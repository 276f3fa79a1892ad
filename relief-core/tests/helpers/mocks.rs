use crate::allocation::{LpProblem, LpSolver};
use crate::models::{Coordinate, Distance, Duration};
use crate::routing::{Assignment, RoutingModel, RoutingSolver};
use crate::transport::{RoadMatrix, RoadNetwork};
use crate::utils::{Environment, GenericResult};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

type LegFn = Arc<dyn Fn(&Coordinate, &Coordinate) -> Option<(Distance, Duration)> + Send + Sync>;

/// A road network which returns legs produced by a function.
pub struct MockRoadNetwork {
    leg_fn: Option<LegFn>,
}

impl MockRoadNetwork {
    /// Creates a network which is never reachable.
    pub fn unavailable() -> Self {
        Self { leg_fn: None }
    }

    /// Creates a network which uses given function to produce legs.
    pub fn new<F>(leg_fn: F) -> Self
    where
        F: Fn(&Coordinate, &Coordinate) -> Option<(Distance, Duration)> + Send + Sync + 'static,
    {
        Self { leg_fn: Some(Arc::new(leg_fn)) }
    }

    /// Creates a network which reports no route for any pair.
    pub fn no_routes() -> Self {
        Self::new(|_, _| None)
    }

    /// Creates a network which reports the same leg for any pair.
    pub fn constant(distance: Distance, duration: Duration) -> Self {
        Self::new(move |_, _| Some((distance, duration)))
    }
}

impl RoadNetwork for MockRoadNetwork {
    fn matrix(&self, coordinates: &[Coordinate]) -> GenericResult<RoadMatrix> {
        let leg_fn = self.leg_fn.as_ref().ok_or_else(|| "connection refused".to_string())?;
        let size = coordinates.len();
        let legs = (0..size)
            .flat_map(|from| (0..size).map(move |to| (from, to)))
            .map(|(from, to)| if from == to { Some((0., 0.)) } else { leg_fn(&coordinates[from], &coordinates[to]) })
            .collect();

        RoadMatrix::new(size, legs)
    }

    fn geometry(&self, coordinates: &[Coordinate]) -> Option<Vec<Coordinate>> {
        self.leg_fn.as_ref()?;

        let (first, last) = (coordinates.first()?, coordinates.last()?);
        let middle = Coordinate::new((first.lat + last.lat) / 2., (first.lng + last.lng) / 2.);

        Some(vec![*first, middle, *last])
    }
}

/// A road network which cannot provide matrix, but counts geometry requests.
#[derive(Default)]
pub struct UnreachableRoadNetwork {
    pub geometry_calls: AtomicUsize,
}

impl RoadNetwork for UnreachableRoadNetwork {
    fn matrix(&self, _: &[Coordinate]) -> GenericResult<RoadMatrix> {
        Err("connection timed out".into())
    }

    fn geometry(&self, coordinates: &[Coordinate]) -> Option<Vec<Coordinate>> {
        self.geometry_calls.fetch_add(1, Ordering::Relaxed);
        Some(coordinates.to_vec())
    }
}

/// An LP solver which always fails.
pub struct FailingLpSolver;

impl LpSolver for FailingLpSolver {
    fn solve(&self, _: &LpProblem) -> GenericResult<Vec<f64>> {
        Err("solver is down".into())
    }
}

/// An LP solver which returns predefined values.
pub struct FixedLpSolver(pub Vec<f64>);

impl LpSolver for FixedLpSolver {
    fn solve(&self, _: &LpProblem) -> GenericResult<Vec<f64>> {
        Ok(self.0.clone())
    }
}

/// A routing solver which never finds a solution.
pub struct NoSolutionRoutingSolver;

impl RoutingSolver for NoSolutionRoutingSolver {
    fn solve(&self, _: &RoutingModel, _: &Environment) -> Option<Assignment> {
        None
    }
}

/// A routing solver which returns predefined sequences if they honor every dimension.
pub struct FixedRoutingSolver(pub Vec<Vec<usize>>);

impl RoutingSolver for FixedRoutingSolver {
    fn solve(&self, model: &RoutingModel, _: &Environment) -> Option<Assignment> {
        Assignment::from_sequences(model, self.0.clone()).ok()
    }
}
