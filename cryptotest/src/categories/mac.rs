use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct MacTests {
    print_results: bool,
}

impl MacTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for MacTests {
    fn tested_part(&self) -> &str {
        "Mac"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::Mac(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let hash = crypto.hash(scheme).map_err(init_failure)?;

        let key = vec![0x0b; scheme.size()];
        let tag = hash.mac(&key, MESSAGE).map_err(run_failure)?;
        print_result(self.print_results, unit, &tag);
        if tag != hash.mac(&key, MESSAGE).map_err(run_failure)? {
            return Err(Failure::run("mac is not deterministic"));
        }
        if tag == hash.mac(&key, b"another message").map_err(run_failure)? {
            return Err(Failure::run("mac ignores the message"));
        }
        Ok(())
    }
}
