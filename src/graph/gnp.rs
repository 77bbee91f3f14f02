use crate::graph::*;
use rand::{Rng, seq::SliceRandom};
use rand_distr::Geometric;

pub trait GnpGenerator: Sized {
    /// Generates a directed Gilbert graph on the nodes `1..=n`.
    /// Each of the `n(n-1)` loop-free arcs exists independently with probability `p`.
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self;

    /// Same as [`GnpGenerator::random_gnp`] but additionally plants the arcs of a
    /// Hamiltonian path through a random permutation of `1..=n`, which is returned.
    fn random_gnp_with_path<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> (Self, Vec<Node>);
}

impl GnpGenerator for HamiltonianInstance {
    fn random_gnp<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Self {
        let range = NodeRange::try_new(1, n).expect("n >= 1");
        let edges = random_directed_arcs(rng, n, p);
        Self::try_new(range, edges).expect("arcs lie within 1..=n")
    }

    fn random_gnp_with_path<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> (Self, Vec<Node>) {
        let range = NodeRange::try_new(1, n).expect("n >= 1");

        let mut path: Vec<Node> = range.iter().collect();
        path.shuffle(rng);

        let mut edges = random_directed_arcs(rng, n, p);
        edges.extend(path.windows(2).map(|w| Edge(w[0], w[1])));

        let instance = Self::try_new(range, edges).expect("arcs lie within 1..=n");
        (instance, path)
    }
}

fn random_directed_arcs<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> Vec<Edge> {
    let n = n as i64;
    BernoulliSamplingRange::new(rng, 0, n * n, p)
        .filter_map(|x| {
            let u = x / n;
            let v = x % n;
            (u != v).then_some(Edge(u as Node + 1, v as Node + 1))
        })
        .collect()
}

/// Provides an iterator similarly to Range, but
/// includes each element i.i.d. with probability of p
pub struct BernoulliSamplingRange<'a, R: Rng> {
    current: i64,
    end: i64,
    distr: Geometric,
    rng: &'a mut R,
}

impl<'a, R: Rng> BernoulliSamplingRange<'a, R> {
    pub fn new(rng: &'a mut R, begin: i64, end: i64, prob: f64) -> Self {
        debug_assert!(begin <= end);
        debug_assert!((0.0..=1.0).contains(&prob));
        Self {
            rng,
            current: begin - 1,
            end,
            distr: Geometric::new(prob).unwrap(),
        }
    }

    fn try_advance(&mut self) {
        if self.current >= self.end {
            return;
        }

        let skip = self.rng.sample(self.distr);
        if skip > i64::MAX as u64 {
            self.current = self.end;
        } else {
            self.current += 1;
            self.current = match self.current.checked_add(skip as i64) {
                Some(x) => x,
                None => self.end,
            }
        }
    }
}

impl<R: Rng> Iterator for BernoulliSamplingRange<'_, R> {
    type Item = i64;
    fn next(&mut self) -> Option<Self::Item> {
        self.try_advance();

        if self.current >= self.end {
            None
        } else {
            Some(self.current)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use fxhash::FxHashSet;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn bernoulli_range() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x5eed);

        assert_eq!(BernoulliSamplingRange::new(rng, 0, 0, 1.0).count(), 0);
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 10, 1.0).count(), 10);
        assert_eq!(BernoulliSamplingRange::new(rng, 0, 100, 0.0).count(), 0);
    }

    #[test]
    fn gnp_density() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x1234);

        for p in [0.01, 0.1, 0.5] {
            let repeats = 50;
            let n = 60;

            let mean_edges = (0..repeats)
                .map(|_| HamiltonianInstance::random_gnp(rng, n, p).number_of_edges() as f64)
                .sum::<f64>()
                / repeats as f64;

            let expected = p * (n as f64) * ((n - 1) as f64);
            assert!((0.75 * expected..1.25 * expected).contains(&mean_edges));
        }
    }

    #[test]
    fn planted_path() {
        let rng = &mut Pcg64Mcg::seed_from_u64(0x9876);

        for n in 1..20 {
            let (instance, path) = HamiltonianInstance::random_gnp_with_path(rng, n, 0.1);
            assert_eq!(instance.number_of_nodes(), n);
            assert_eq!(path.len(), n as usize);
            assert_eq!(path.iter().collect::<FxHashSet<_>>().len(), n as usize);
            assert!(path.windows(2).all(|w| instance.has_edge(w[0], w[1])));
            assert!(instance.ordered_edges().all(|e| !e.is_loop()));
        }
    }
}
