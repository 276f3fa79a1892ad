use super::*;
use crate::format::problem::PragmaticProblem;
use crate::format::solution::create_solution;
use crate::helpers::*;
use relief_core::prelude::{Environment, Planner, PlanningConfig};
use std::sync::Arc;

#[test]
fn can_accept_feasible_solution() {
    let context = CheckerContext::new(create_two_locations_request(), create_two_locations_solution());

    assert_eq!(context.check(), Ok(()));
}

#[test]
fn can_report_each_error_once() {
    let mut solution = create_two_locations_solution();
    solution.routes.push(create_route("vehicle_2", vec![create_stop("Puri", 10)]));
    solution.routes.push(create_route("vehicle_3", vec![create_stop("Puri", 10)]));
    solution.summary.total_trucks = 3;

    let result = CheckerContext::new(create_two_locations_request(), solution).check();

    let errors = result.err().expect("expected errors");
    assert_eq!(errors.len(), errors.iter().collect::<HashSet<_>>().len());
    assert!(errors.contains(&"location 'Puri' is visited more than once".to_string()));
}

#[test]
fn can_check_planned_solution() {
    let request = Request {
        vehicle_capacity: Some(20),
        max_fleet_size: Some(1),
        ..create_two_locations_request()
    };
    let problem = request.clone().read_pragmatic().expect("cannot read request").problem;
    let planner = Planner::new(Arc::new(PlanningConfig::default()), Arc::new(Environment::default()));

    let plan = planner.plan(&problem).expect("cannot plan");
    let solution = create_solution(&problem, &plan);

    assert!(solution.summary.assigned_resources <= 20);
    assert_eq!(CheckerContext::new(request, solution).check(), Ok(()));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    prop_compose! {
        fn random_request()(offsets in prop::collection::vec((-0.5_f64..0.5, -0.5_f64..0.5, 0_i64..60), 1..7),
                            capacity in 10_i64..120,
                            fleet_size in 1_i64..4) -> Request {
            let locations = offsets
                .into_iter()
                .enumerate()
                .map(|(idx, (lat, lon, water))| {
                    create_request_location(&format!("L{idx}"), (20.2444 + lat, 85.8172 + lon), &[("water", water)])
                })
                .collect();

            Request {
                vehicle_capacity: Some(capacity),
                max_fleet_size: Some(fleet_size),
                time_limit_seconds: Some(0.05),
                ..create_request(locations)
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn can_plan_feasible_solutions(request in random_request()) {
            let problem = request.clone().read_pragmatic().expect("cannot read request").problem;
            let planner = Planner::new(Arc::new(PlanningConfig::default()), Arc::new(Environment::default()));

            let plan = planner.plan(&problem).expect("cannot plan");
            let solution = create_solution(&problem, &plan);

            prop_assert_eq!(CheckerContext::new(request, solution).check(), Ok(()));
        }
    }
}
