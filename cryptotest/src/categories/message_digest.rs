use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct MessageDigestTests {
    print_results: bool,
}

impl MessageDigestTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for MessageDigestTests {
    fn tested_part(&self) -> &str {
        "MessageDigest"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::MessageDigest(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let hash = crypto.hash(scheme).map_err(init_failure)?;

        let out = hash.digest(&[1, 2, 3]).map_err(run_failure)?;
        print_result(self.print_results, unit, &out);
        if out.len() != hash.size() {
            return Err(Failure::run(format!(
                "digest is {} bytes, expected {}",
                out.len(),
                hash.size()
            )));
        }
        Ok(())
    }
}
