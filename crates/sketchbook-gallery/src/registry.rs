use crate::sample::Setup;
use crate::samples;

/// One gallery entry: a unique human-readable name and the sample's setup
/// function.
pub struct SampleEntry {
    pub name: &'static str,
    pub setup: Setup,
}

/// The gallery table.
///
/// An explicit compile-time table rather than any discovery mechanism; a new
/// sample is added by writing its module and one line here. Order is the
/// order shown in the startup listing and bound to the number keys.
pub const SAMPLES: &[SampleEntry] = &[
    SampleEntry {
        name: "hello-triangle",
        setup: samples::hello_triangle::setup,
    },
    SampleEntry {
        name: "rotating-cube",
        setup: samples::rotating_cube::setup,
    },
];

/// Resolves a sample name. Unknown names resolve to `None`; the caller
/// treats that as a no-op.
pub fn find(name: &str) -> Option<&'static SampleEntry> {
    SAMPLES.iter().find(|entry| entry.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        for (i, a) in SAMPLES.iter().enumerate() {
            for b in &SAMPLES[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn every_registered_name_resolves() {
        for entry in SAMPLES {
            assert!(find(entry.name).is_some());
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(find("no-such-sample").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(find("Hello-Triangle").is_none());
    }
}
