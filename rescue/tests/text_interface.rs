use jf_rescue_prime::{RescueError, RescueHasher, SpongePhase};

const MODULUS: &str = "270497897142230380135924736767050121217";

// Callers split free-form text on commas and whitespace, one token per
// update, and print the digest back.
fn hash_message(message: &str) -> Result<String, RescueError> {
    let mut hasher = RescueHasher::new_from_str(MODULUS, "2", 4, 12, 7, 4)?;
    for token in message
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        hasher.update(token)?;
    }
    hasher.finish()
}

#[test]
fn pinned_digests() -> Result<(), RescueError> {
    assert_eq!(
        hash_message("1")?,
        "57667585169331655096272815287526063403 31477907114869600447836705561891585353 \
         171334108380453640245335815764684237924 3091949634401278711500805538593965968"
    );
    assert_eq!(
        hash_message("1, 2")?,
        "35475060694075869911074721053965115240 202557522908213076767021326150311658134 \
         76889490292050636323985956495377886340 167300468312099793878241913754976257528"
    );
    assert_eq!(
        hash_message("0 1 2 3 4 5 6 7 8 9")?,
        "98126630305921013194200566858688236496 193969847202567456712455787897030326705 \
         13038763747244502774928086725458633114 125821069969162098240396568172612746239"
    );
    Ok(())
}

#[test]
fn separators_do_not_matter() -> Result<(), RescueError> {
    assert_eq!(hash_message("1,2")?, hash_message("1 \n 2")?);
    assert_eq!(hash_message("")?, hash_message(" , ")?);
    Ok(())
}

#[test]
fn digest_feeds_back_as_message() -> Result<(), RescueError> {
    let digest = hash_message("42")?;
    let chained = hash_message(&digest)?;
    assert_eq!(chained.split(' ').count(), 4);
    assert_ne!(chained, digest);
    Ok(())
}

#[test]
fn bad_token_is_reported() {
    assert!(matches!(
        hash_message("1 abc 3"),
        Err(RescueError::InvalidInput(_))
    ));
}

#[test]
fn finished_hasher_rejects_everything() -> Result<(), RescueError> {
    let mut hasher = RescueHasher::new_from_str(MODULUS, "2", 4, 12, 7, 4)?;
    hasher.finish()?;
    assert_eq!(hasher.phase(), SpongePhase::Finished);
    assert!(matches!(hasher.finish(), Err(RescueError::InvalidState(_))));
    assert!(matches!(
        hasher.update("5"),
        Err(RescueError::InvalidState(_))
    ));
    Ok(())
}

#[test]
fn other_moduli_are_accepted() -> Result<(), RescueError> {
    // 2^127 - 1
    let mut hasher =
        RescueHasher::new_from_str("170141183460469231731687303715884105727", "3", 4, 12, 7, 4)?;
    hasher.update("1")?;
    assert_eq!(
        hasher.finish()?,
        "146427214207490492349826064876626285120 154457358801462015266078711511907944966 \
         84662913572801893449808055013503962257 155845210459777873976473161491280611792"
    );

    // 5 divides p - 1 for both 2^64 - 2^32 + 1 and 2^61 - 1, so x^5 is not a
    // permutation there
    for (p, g) in [("18446744069414584321", "7"), ("2305843009213693951", "37")] {
        assert!(matches!(
            RescueHasher::new_from_str(p, g, 1, 3, 2, 2),
            Err(RescueError::ConfigurationError(_))
        ));
    }
    Ok(())
}

#[test]
fn rejects_capacity_not_below_width() {
    assert!(matches!(
        RescueHasher::new_from_str(MODULUS, "2", 12, 12, 7, 4),
        Err(RescueError::ConfigurationError(_))
    ));
}
