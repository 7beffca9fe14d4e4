use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct KeyPairGeneratorTests {
    print_results: bool,
}

impl KeyPairGeneratorTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for KeyPairGeneratorTests {
    fn tested_part(&self) -> &str {
        "KeyPairGenerator"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::KeyPairGenerator(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let generator = crypto.signature(scheme).map_err(init_failure)?;

        let first = generator.generate_key_pair().map_err(run_failure)?;
        let second = generator.generate_key_pair().map_err(run_failure)?;
        print_result(self.print_results, unit, first.public_key());

        if first.private_key().is_empty() || first.public_key().is_empty() {
            return Err(Failure::run("generated an empty key"));
        }
        if first.signature_scheme() != scheme {
            return Err(Failure::run(format!(
                "generated a {} key pair, expected {}",
                first.signature_scheme(),
                scheme
            )));
        }
        if first.public_key() == second.public_key() {
            return Err(Failure::run("generated the same key pair twice"));
        }
        Ok(())
    }
}
