//! `test` verb: quick smoke checks on the core APIs, meant to catch a broken build fast rather
//! than to replace the unit/integration test suites.

use crate::core::config::EngineConfig;
use crate::core::errors::Result;
use crate::generators::fixtures;
use crate::{existence, kernel, verifier};

pub fn run() -> Result<()> {
    let config = EngineConfig::default();
    let instance = fixtures::housing_three_cycle();

    let top_choice_matching = crate::model::Matching::from_pairs(vec![Some(1), Some(2), Some(0)]);
    assert!(kernel::is_valid(&top_choice_matching, &instance), "smoke: top-choice matching should validate");
    assert!(
        verifier::is_k_stable(&top_choice_matching, &instance, 1, &config)?,
        "smoke: giving everyone their top choice must be 1-stable"
    );
    assert!(existence::k_stable_exists(&instance, 1, &config)?, "smoke: k=1 existence must hold unconditionally");

    let witness = existence::find_k_stable(&instance, 3, &config)?;
    if let Some(matching) = &witness {
        assert!(verifier::is_k_stable(matching, &instance, 3, &config)?, "smoke: produced witness must verify");
    }

    println!("smoke checks passed");
    Ok(())
}
