use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

const OUTPUT_LENGTH: u16 = 42;

pub struct KdfTests {
    print_results: bool,
}

impl KdfTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for KdfTests {
    fn tested_part(&self) -> &str {
        "KDF"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::Kdf(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let kdf = crypto.kdf(scheme).map_err(init_failure)?;

        let prk = kdf.extract(MESSAGE, b"salt").map_err(run_failure)?;
        if prk.len() != kdf.extract_size() {
            return Err(Failure::run(format!(
                "extracted {} bytes, expected {}",
                prk.len(),
                kdf.extract_size()
            )));
        }
        let okm = kdf.expand(&prk, b"info", OUTPUT_LENGTH).map_err(run_failure)?;
        print_result(self.print_results, unit, &okm);
        if okm.len() != OUTPUT_LENGTH as usize {
            return Err(Failure::run(format!("expanded {} bytes", okm.len())));
        }
        if okm != kdf.expand(&prk, b"info", OUTPUT_LENGTH).map_err(run_failure)? {
            return Err(Failure::run("derivation is not deterministic"));
        }
        Ok(())
    }
}
