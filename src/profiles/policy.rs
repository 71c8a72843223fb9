//! Profile lookup policy.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Tuning values for one instance class.
///
/// # Examples
///
/// ```
/// use tsp_stitch::profiles::Profile;
///
/// let p = Profile::standard();
/// assert_eq!(p.iterations_per_temperature, 100_000);
/// assert!(!p.skip_or_opt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Initial annealing temperature.
    pub initial_temperature: f64,

    /// Annealing iterations per temperature level.
    pub iterations_per_temperature: usize,

    /// Skip the 2.5-opt stage entirely.
    #[serde(default)]
    pub skip_or_opt: bool,
}

impl Profile {
    /// The standard full-budget profile.
    pub fn standard() -> Self {
        Self {
            initial_temperature: 1e9,
            iterations_per_temperature: 100_000,
            skip_or_opt: false,
        }
    }

    fn reduced(initial_temperature: f64, iterations_per_temperature: usize) -> Self {
        Self {
            initial_temperature,
            iterations_per_temperature,
            skip_or_opt: false,
        }
    }
}

/// The provenance class of an input instance, usually derived from its
/// file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceClass {
    /// A numbered competition instance (`test-input-N`).
    TestInput(u32),

    /// A course example instance (`tsp_example_*`).
    Example,

    /// Anything else.
    Generic,
}

impl InstanceClass {
    /// Classifies an input by its file name.
    ///
    /// Only the stem before the first `.` is inspected. A stem containing
    /// `test-input` followed by `-N` yields [`InstanceClass::TestInput`];
    /// one containing `tsp_example` yields [`InstanceClass::Example`];
    /// everything else (including a `test-input` stem with no parsable
    /// number) is [`InstanceClass::Generic`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tsp_stitch::profiles::InstanceClass;
    ///
    /// assert_eq!(
    ///     InstanceClass::from_file_name("test-input-7.txt"),
    ///     InstanceClass::TestInput(7)
    /// );
    /// assert_eq!(
    ///     InstanceClass::from_file_name("tsp_example_3.txt"),
    ///     InstanceClass::Example
    /// );
    /// assert_eq!(
    ///     InstanceClass::from_file_name("cities.txt"),
    ///     InstanceClass::Generic
    /// );
    /// ```
    pub fn from_file_name(name: &str) -> Self {
        let stem = name.split('.').next().unwrap_or(name);

        if let Some(pos) = stem.find("test-input") {
            let rest = &stem[pos + "test-input".len()..];
            if let Some(digits) = rest.strip_prefix('-') {
                let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
                if let Ok(num) = digits.parse::<u32>() {
                    return InstanceClass::TestInput(num);
                }
            }
            return InstanceClass::Generic;
        }

        if stem.contains("tsp_example") {
            return InstanceClass::Example;
        }

        InstanceClass::Generic
    }
}

/// The full instance-class → profile mapping.
///
/// The built-in table carries the shipped tuning; a custom table can be
/// loaded from JSON to re-tune without rebuilding. Lookups never fail —
/// unknown classes and unknown test-input numbers fall back to the default
/// profile.
///
/// # Examples
///
/// ```
/// use tsp_stitch::profiles::{InstanceClass, ProfilePolicy};
///
/// let policy = ProfilePolicy::default();
/// let p = policy.profile_for(&InstanceClass::TestInput(7));
/// assert!(p.skip_or_opt);
/// let q = policy.profile_for(&InstanceClass::TestInput(99));
/// assert_eq!(q.iterations_per_temperature, 100_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilePolicy {
    /// Fallback for every class without its own entry.
    pub default_profile: Profile,

    /// Profile for example instances.
    pub example: Profile,

    /// Per-number profiles for competition instances.
    #[serde(default)]
    pub test_input: BTreeMap<u32, Profile>,
}

impl Default for ProfilePolicy {
    /// The shipped table: competition instances 1–4 run the standard
    /// budget; 5, 6, and 7 run progressively reduced budgets to bound
    /// runtime on large inputs, with 7 also skipping 2.5-opt.
    fn default() -> Self {
        let mut test_input = BTreeMap::new();
        for num in 1..=4 {
            test_input.insert(num, Profile::standard());
        }
        test_input.insert(5, Profile::reduced(1e8, 75_000));
        test_input.insert(6, Profile::reduced(1e6, 25_000));
        test_input.insert(
            7,
            Profile {
                initial_temperature: 950_000.0,
                iterations_per_temperature: 6000,
                skip_or_opt: true,
            },
        );

        Self {
            default_profile: Profile::standard(),
            example: Profile::standard(),
            test_input,
        }
    }
}

impl ProfilePolicy {
    /// Loads a policy table from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Returns the profile for an instance class, logging the choice.
    pub fn profile_for(&self, class: &InstanceClass) -> Profile {
        match class {
            InstanceClass::TestInput(num) => {
                let p = self
                    .test_input
                    .get(num)
                    .copied()
                    .unwrap_or(self.default_profile);
                info!(
                    instance = num,
                    initial_temperature = p.initial_temperature,
                    iterations = p.iterations_per_temperature,
                    "test instance profile selected"
                );
                p
            }
            InstanceClass::Example => {
                info!(
                    initial_temperature = self.example.initial_temperature,
                    iterations = self.example.iterations_per_temperature,
                    "example profile selected"
                );
                self.example
            }
            InstanceClass::Generic => {
                info!(
                    initial_temperature = self.default_profile.initial_temperature,
                    iterations = self.default_profile.iterations_per_temperature,
                    "default profile selected"
                );
                self.default_profile
            }
        }
    }
}
