use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct KemTests {
    print_results: bool,
}

impl KemTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for KemTests {
    fn tested_part(&self) -> &str {
        "KEM"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::Kem(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let kem = crypto.kem(scheme).map_err(init_failure)?;

        let key_pair = kem.generate_key_pair().map_err(run_failure)?;
        let (encapsulated, secret) = kem
            .encapsulate(key_pair.public_key(), b"info")
            .map_err(run_failure)?;
        print_result(self.print_results, unit, &secret);
        let recovered = kem
            .decapsulate(key_pair.private_key(), &encapsulated, b"info")
            .map_err(run_failure)?;
        if secret != recovered {
            return Err(Failure::run("decapsulated secret differs"));
        }
        Ok(())
    }
}
