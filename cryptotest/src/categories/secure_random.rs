use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct SecureRandomTests {
    print_results: bool,
}

impl SecureRandomTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for SecureRandomTests {
    fn tested_part(&self) -> &str {
        "SecureRandom"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::SecureRandom(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let rand = crypto.rand(scheme).map_err(init_failure)?;

        let mut first = [0u8; 32];
        let mut second = [0u8; 32];
        rand.fill(&mut first).map_err(run_failure)?;
        rand.fill(&mut second).map_err(run_failure)?;
        print_result(self.print_results, unit, &first);
        if first == second {
            return Err(Failure::run("generator repeated its output"));
        }
        Ok(())
    }
}
