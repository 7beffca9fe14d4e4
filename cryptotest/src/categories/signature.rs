use super::*;
use crate::config::Settings;
use crate::runner::AlgorithmTest;

pub struct SignatureTests {
    print_results: bool,
}

impl SignatureTests {
    pub fn create(settings: &Settings) -> Box<dyn AlgorithmTest> {
        Box::new(Self {
            print_results: settings.verbosity.print_results,
        })
    }
}

impl AlgorithmTest for SignatureTests {
    fn tested_part(&self) -> &str {
        "Signature"
    }

    fn check_algorithm(&self, unit: &TestUnit) -> std::result::Result<(), Failure> {
        let (crypto, algorithm) = get_instance(unit)?;
        let Algorithm::Signature(scheme) = algorithm else {
            return Err(unexpected(unit, algorithm));
        };
        let signature = crypto.signature(scheme).map_err(init_failure)?;

        let key_pair = signature.generate_key_pair().map_err(init_failure)?;
        let signed = signature
            .sign(key_pair.private_key(), MESSAGE)
            .map_err(run_failure)?;
        print_result(self.print_results, unit, &signed);

        signature
            .verify(key_pair.public_key(), MESSAGE, &signed)
            .map_err(run_failure)?;
        if signature
            .verify(key_pair.public_key(), b"tampered message", &signed)
            .is_ok()
        {
            return Err(Failure::run("signature verified over a different message"));
        }
        Ok(())
    }
}
