use std::io::{self, Write};

use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use crate::{
    check::{is_partitioned, is_permutation, zero_count},
    movers::ZeroMover,
    ZeroesOptions,
};

pub const PASS_INPUT: [i32; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];

/// Many outputs are correct for `PASS_INPUT`; these are the two the movers produce.
pub const PASS_EXPECTED: [[i32; 10]; 2] = [
    [0, 0, 1, 2, 3, 4, 5, 6, 7, 8],
    [0, 0, 3, 4, 5, 6, 7, 8, 2, 1],
];

const TITLE: &str = "Move all zero values in a random array to its beginning";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Pass,
    Fail,
    Random,
}

impl Scenario {
    fn title(&self) -> &'static str {
        match self {
            Scenario::Pass => "UnitTestPassScenario",
            Scenario::Fail => "UnitTestFailScenario",
            Scenario::Random => "UnitTestRandomScenario",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub mover: String,
    pub passed: bool,
    /// What went wrong, when something did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ScenarioReport {
    fn new(scenario: Scenario, mover: &dyn ZeroMover, failure: Option<String>) -> Self {
        let report = Self {
            scenario,
            mover: mover.name().to_string(),
            passed: failure.is_none(),
            detail: failure,
        };
        match &report.detail {
            None => info!("{} ({}): passed", scenario.title(), report.mover),
            Some(detail) => warn!("{} ({}): {detail}", scenario.title(), report.mover),
        }
        report
    }

    pub fn status(&self) -> &'static str {
        if self.passed {
            "Ok"
        } else {
            "FAIL"
        }
    }

}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SuiteReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl SuiteReport {
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|report| report.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.scenarios.iter().filter(|report| !report.passed)
    }
}

/// Runs the mover on `PASS_INPUT` and accepts either of `PASS_EXPECTED`.
pub fn pass_scenario(mover: &dyn ZeroMover) -> ScenarioReport {
    let mut array = PASS_INPUT;
    let failure = match mover.apply(&mut array) {
        Err(err) => Some(err.to_string()),
        Ok(()) if PASS_EXPECTED.contains(&array) => None,
        Ok(()) => Some(format!("unexpected output {array:?}")),
    };
    ScenarioReport::new(Scenario::Pass, mover, failure)
}

/// Checks that every invalid `(array, size)` combination is rejected.
pub fn fail_scenario(mover: &dyn ZeroMover) -> ScenarioReport {
    let mut empty: [i32; 0] = [];
    let attempts = [
        ("absent array, size 0", mover.move_zeroes(None, 0)),
        ("absent array, size 1", mover.move_zeroes(None, 1)),
        ("empty array, size 0", mover.move_zeroes(Some(&mut empty), 0)),
    ];
    let accepted: Vec<_> = attempts
        .iter()
        .filter(|(_, result)| result.is_ok())
        .map(|(case, _)| *case)
        .collect();
    let failure = (!accepted.is_empty()).then(|| format!("accepted {}", accepted.join("; ")));
    ScenarioReport::new(Scenario::Fail, mover, failure)
}

/// Settings for the randomized scenario.
#[derive(Debug, Clone, Copy)]
pub struct RandomConfig {
    pub trials: usize,
    pub max_len: usize,
    pub seed: Option<u64>,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            trials: 0,
            max_len: 32,
            seed: None,
        }
    }
}

impl RandomConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Roughly half zeros, the rest in `-9..=9` without zero.
pub fn random_array<R: Rng>(rng: &mut R, max_len: usize) -> Vec<i32> {
    let len = rng.gen_range(1..=max_len.max(1));
    (0..len)
        .map(|_| {
            if rng.gen_bool(0.5) {
                0
            } else {
                let magnitude = rng.gen_range(1..=9);
                if rng.gen() {
                    magnitude
                } else {
                    -magnitude
                }
            }
        })
        .collect()
}

/// Runs the mover over generated arrays and checks the output invariants
/// instead of fixed expectations.
pub fn random_scenario<R: Rng>(
    mover: &dyn ZeroMover,
    trials: usize,
    max_len: usize,
    rng: &mut R,
) -> ScenarioReport {
    let failure = (0..trials).find_map(|_| {
        let input = random_array(rng, max_len);
        check_invariants(mover, &input).err()
    });
    ScenarioReport::new(Scenario::Random, mover, failure)
}

/// Partitioning, permutation and idempotence for one input.
pub fn check_invariants(mover: &dyn ZeroMover, input: &[i32]) -> Result<(), String> {
    let mut output = input.to_vec();
    mover
        .apply(&mut output)
        .map_err(|err| format!("{err} for {input:?}"))?;
    debug!(
        "{}: {} zeros in {} elements",
        mover.name(),
        zero_count(&output),
        output.len()
    );
    if !is_partitioned(&output) {
        return Err(format!("{input:?} gave unpartitioned {output:?}"));
    }
    if !is_permutation(input, &output) {
        return Err(format!("{input:?} gave non-permutation {output:?}"));
    }
    let mut again = output.clone();
    mover
        .apply(&mut again)
        .map_err(|err| format!("{err} for {output:?}"))?;
    if again != output {
        return Err(format!("{output:?} changed to {again:?} on a second pass"));
    }
    Ok(())
}

/// Runs every scenario for every selected mover and writes the transcript.
pub struct Harness {
    movers: Vec<Box<dyn ZeroMover>>,
    random: RandomConfig,
}

impl Harness {
    pub fn new(movers: Vec<Box<dyn ZeroMover>>, random: RandomConfig) -> Self {
        Self { movers, random }
    }

    pub fn from_options(options: &ZeroesOptions) -> Self {
        let movers = options
            .selected_strategies()
            .into_iter()
            .map(|strategy| strategy.mover())
            .collect();
        Self::new(movers, options.random_config())
    }

    pub fn run(&self, out: &mut impl Write) -> io::Result<SuiteReport> {
        let width = self
            .movers
            .iter()
            .map(|mover| mover.name().len())
            .max()
            .unwrap_or_default();
        let mut rng = self.random.rng();
        let mut suite = SuiteReport::default();

        write!(out, "\n{TITLE}\n\n")?;
        for mover in &self.movers {
            let mover = mover.as_ref();
            let label = format!("{:<width$}", mover.name());

            let mut scenarios = vec![Scenario::Pass, Scenario::Fail];
            if self.random.trials > 0 {
                scenarios.push(Scenario::Random);
            }
            for scenario in scenarios {
                write!(out, "{} ({label})... ", scenario.title())?;
                let report = match scenario {
                    Scenario::Pass => pass_scenario(mover),
                    Scenario::Fail => fail_scenario(mover),
                    Scenario::Random => random_scenario(
                        mover,
                        self.random.trials,
                        self.random.max_len,
                        &mut rng,
                    ),
                };
                writeln!(out, "{}", report.status())?;
                suite.scenarios.push(report);
            }
        }
        write!(out, "\nExecution finished\n\n")?;

        Ok(suite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::{MoveError, Result},
        movers::{RuntimeOptimized, SpaceOptimized},
    };

    /// Leaves the array alone and accepts anything.
    struct Identity;

    impl ZeroMover for Identity {
        fn name(&self) -> &'static str {
            "Identity"
        }

        fn rearrange(&self, _array: &mut [i32]) {}

        fn move_zeroes(&self, _array: Option<&mut [i32]>, _size: usize) -> Result<()> {
            Ok(())
        }
    }

    /// Sorts the array, which pushes negative values in front of zeros.
    struct Sorting;

    impl ZeroMover for Sorting {
        fn name(&self) -> &'static str {
            "Sorting"
        }

        fn rearrange(&self, array: &mut [i32]) {
            array.sort();
        }
    }

    #[test]
    fn test_pass_scenario() {
        assert!(pass_scenario(&RuntimeOptimized).passed);
        assert!(pass_scenario(&SpaceOptimized).passed);

        let report = pass_scenario(&Identity);
        assert!(!report.passed);
        assert_eq!(report.status(), "FAIL");
    }

    #[test]
    fn test_fail_scenario() {
        assert!(fail_scenario(&RuntimeOptimized).passed);
        assert!(fail_scenario(&SpaceOptimized).passed);

        let report = fail_scenario(&Identity);
        assert!(!report.passed);
        assert_eq!(
            report.detail.as_deref(),
            Some("accepted absent array, size 0; absent array, size 1; empty array, size 0")
        );
    }

    #[test]
    fn test_random_scenario_catches_bad_mover() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_scenario(&RuntimeOptimized, 200, 16, &mut rng).passed);
        assert!(random_scenario(&SpaceOptimized, 200, 16, &mut rng).passed);
        assert!(check_invariants(&Sorting, &[0, -1]).is_err());
        assert!(!random_scenario(&Sorting, 200, 16, &mut rng).passed);
    }

    #[test]
    fn test_random_array_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let array = random_array(&mut rng, 5);
            assert!((1..=5).contains(&array.len()));
            assert!(array.iter().all(|v| (-9..=9).contains(v)));
        }
        assert_eq!(random_array(&mut rng, 0).len(), 1);
    }

    #[test]
    fn test_harness_transcript_and_report() {
        let harness = Harness::new(
            vec![Box::new(RuntimeOptimized), Box::new(Identity)],
            RandomConfig::default(),
        );
        let mut out = Vec::new();
        let suite = harness.run(&mut out).unwrap();
        let transcript = String::from_utf8(out).unwrap();

        assert!(transcript.contains("UnitTestPassScenario (RuntimeOptimized)... Ok\n"));
        assert!(transcript.contains("UnitTestFailScenario (Identity        )... FAIL\n"));
        assert_eq!(suite.scenarios.len(), 4);
        assert!(!suite.all_passed());
        assert_eq!(suite.failures().count(), 2);
    }

    #[test]
    fn test_error_detail_is_reported() {
        struct Rejecting;
        impl ZeroMover for Rejecting {
            fn name(&self) -> &'static str {
                "Rejecting"
            }
            fn rearrange(&self, _array: &mut [i32]) {}
            fn move_zeroes(&self, _array: Option<&mut [i32]>, _size: usize) -> Result<()> {
                Err(MoveError::InvalidArgument { reason: "always" })
            }
        }

        let report = pass_scenario(&Rejecting);
        assert_eq!(report.detail.as_deref(), Some("Invalid argument: always"));
        assert!(fail_scenario(&Rejecting).passed);
    }
}
