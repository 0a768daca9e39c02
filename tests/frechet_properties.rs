use frechet_dp::{
    discrete_frechet, problems::frechet::FrechetProblem, CouplingProblem, FrechetEngine, Point,
};
use proptest::prelude::*;

fn curve() -> impl Strategy<Value = Vec<Point>> {
    proptest::collection::vec((-50i64..50, -50i64..50), 1..10)
        .prop_map(|raw| raw.into_iter().map(Point::from).collect())
}

fn coupling_monotone(path: &[(usize, usize)]) -> bool {
    path.windows(2).all(|w| {
        let (a, b) = (w[0], w[1]);
        let di = b.0 as isize - a.0 as isize;
        let dj = b.1 as isize - a.1 as isize;
        matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
    })
}

proptest! {
    #[test]
    fn symmetric(p in curve(), q in curve()) {
        prop_assert_eq!(discrete_frechet(&p, &q).unwrap(), discrete_frechet(&q, &p).unwrap());
    }

    #[test]
    fn zero_to_itself(p in curve()) {
        prop_assert_eq!(discrete_frechet(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn appending_far_point_never_decreases(p in curve(), q in curve()) {
        let before = discrete_frechet(&p, &q).unwrap();
        let mut longer = q.clone();
        longer.push(Point::from((1_000, -1_000)));
        let after = discrete_frechet(&p, &longer).unwrap();
        prop_assert!(after >= before, "{} < {}", after, before);
    }

    #[test]
    fn duplicating_a_point_in_place_is_invisible(p in curve(), q in curve(), k in 0usize..10) {
        let k = k % p.len();
        let mut stuttered = p.clone();
        stuttered.insert(k, p[k].clone());
        prop_assert_eq!(discrete_frechet(&p, &q).unwrap(), discrete_frechet(&stuttered, &q).unwrap());
    }

    #[test]
    fn bounded_by_endpoint_links(p in curve(), q in curve()) {
        let d = discrete_frechet(&p, &q).unwrap();
        let first = p[0].distance(&q[0]);
        let last = p[p.len() - 1].distance(&q[q.len() - 1]);
        prop_assert!(d >= first && d >= last);
    }

    #[test]
    fn coupling_realises_the_distance(p in curve(), q in curve()) {
        let problem = FrechetProblem::new(&p, &q).unwrap();
        let outcome = FrechetEngine::with_strategy(&problem, frechet_dp::Strategy::BottomUp).run().unwrap();
        let path = outcome.coupling().unwrap();
        prop_assert_eq!(path.first(), Some(&(0, 0)));
        prop_assert_eq!(path.last(), Some(&(p.len() - 1, q.len() - 1)));
        prop_assert!(coupling_monotone(&path));
        let worst = path
            .iter()
            .map(|&(i, j)| problem.link_cost(i, j))
            .fold(0.0f64, f64::max);
        prop_assert_eq!(worst, outcome.distance);
    }
}
