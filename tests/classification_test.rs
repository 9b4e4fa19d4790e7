use wiratan::{FloorType, Gender, HouseType, HouseholdProfile, PovertyStatus, classify};

/// Create a test profile
fn create_test_profile(
    income: u64,
    dependents: u32,
    house_type: HouseType,
    floor_type: FloorType,
    health_issues: bool,
) -> HouseholdProfile {
    HouseholdProfile::builder("Uji Warga", "3321999901")
        .gender(Gender::Male)
        .income(income)
        .dependents(dependents)
        .house_type(house_type)
        .floor_type(floor_type)
        .health_issues(health_issues)
        .occupation("Serabutan")
        .year(2026)
        .build()
        .unwrap()
}

#[test]
fn test_sample_poor_household() {
    let profile =
        create_test_profile(500_000, 4, HouseType::WoodBamboo, FloorType::Dirt, true);
    let outcome = classify(&profile);
    assert_eq!(outcome.status, PovertyStatus::Poor);
    assert_eq!(
        outcome.reason,
        "Penghasilan sangat rendah (≤800rb) disertai beban tanggungan keluarga yang banyak (≥3 orang)."
    );
}

#[test]
fn test_sample_not_poor_household() {
    let profile =
        create_test_profile(1_200_000, 2, HouseType::Permanent, FloorType::Tiled, false);
    let outcome = classify(&profile);
    assert_eq!(outcome.status, PovertyStatus::NotPoor);
    assert_eq!(
        outcome.reason,
        "Penghasilan mencukupi untuk kebutuhan dasar dengan jumlah tanggungan yang proporsional."
    );
}

#[test]
fn test_sample_near_poor_household() {
    let profile =
        create_test_profile(850_000, 3, HouseType::SemiPermanent, FloorType::Cement, false);
    let outcome = classify(&profile);
    assert_eq!(outcome.status, PovertyStatus::NearPoor);
    assert_eq!(
        outcome.reason,
        "Penghasilan rendah, namun beban keluarga dan kondisi fisik rumah masih dalam batas wajar."
    );
}

#[test]
fn test_classification_is_deterministic() {
    let profile =
        create_test_profile(760_000, 1, HouseType::SemiPermanent, FloorType::Cement, true);
    let first = classify(&profile);
    let second = classify(&profile);
    assert_eq!(first, second);
}

#[test]
fn test_every_input_gets_a_status_and_reason() {
    let incomes = [0, 400_000, 800_000, 800_001, 1_000_000, 1_000_001, 5_000_000];
    let dependent_counts = [0, 2, 3, 8];
    let house_types = [
        HouseType::Permanent,
        HouseType::SemiPermanent,
        HouseType::WoodBamboo,
    ];
    let floor_types = [FloorType::Tiled, FloorType::Cement, FloorType::Dirt];

    for income in incomes {
        for dependents in dependent_counts {
            for house_type in house_types {
                for floor_type in floor_types {
                    for health_issues in [false, true] {
                        let profile = create_test_profile(
                            income,
                            dependents,
                            house_type,
                            floor_type,
                            health_issues,
                        );
                        let outcome = classify(&profile);
                        assert!(
                            !outcome.reason.trim().is_empty(),
                            "empty reason for income {income}, dependents {dependents}"
                        );
                        assert!(PovertyStatus::all().contains(&outcome.status));
                    }
                }
            }
        }
    }
}

#[test]
fn test_lower_income_never_looks_safer() {
    // Walking income downwards with every other factor fixed must never move
    // a household to a less vulnerable status.
    let incomes = [2_000_000, 1_000_001, 1_000_000, 850_000, 800_000, 500_000, 0];
    for dependents in [0, 3] {
        for health_issues in [false, true] {
            let mut previous: Option<PovertyStatus> = None;
            for income in incomes {
                let profile = create_test_profile(
                    income,
                    dependents,
                    HouseType::SemiPermanent,
                    FloorType::Cement,
                    health_issues,
                );
                let status = classify(&profile).status;
                if let Some(previous) = previous {
                    assert!(
                        status >= previous,
                        "income {income} produced {status} after {previous}"
                    );
                }
                previous = Some(status);
            }
        }
    }
}

#[test]
fn test_more_dependents_never_look_safer() {
    for income in [500_000, 800_000, 900_000, 1_200_000] {
        let mut previous: Option<PovertyStatus> = None;
        for dependents in 0..8 {
            let profile = create_test_profile(
                income,
                dependents,
                HouseType::Permanent,
                FloorType::Tiled,
                false,
            );
            let status = classify(&profile).status;
            if let Some(previous) = previous {
                assert!(
                    status >= previous,
                    "dependents {dependents} at income {income} produced {status} after {previous}"
                );
            }
            previous = Some(status);
        }
    }
}

#[test]
fn test_unfit_housing_pushes_low_income_to_poor() {
    let tiled = create_test_profile(700_000, 0, HouseType::Permanent, FloorType::Tiled, false);
    assert_eq!(classify(&tiled).status, PovertyStatus::NearPoor);

    let dirt = create_test_profile(700_000, 0, HouseType::Permanent, FloorType::Dirt, false);
    assert_eq!(classify(&dirt).status, PovertyStatus::Poor);

    let bamboo = create_test_profile(700_000, 0, HouseType::WoodBamboo, FloorType::Tiled, false);
    assert_eq!(classify(&bamboo).status, PovertyStatus::Poor);
}

#[test]
fn test_chronic_illness_pushes_low_income_to_poor() {
    let healthy = create_test_profile(700_000, 0, HouseType::Permanent, FloorType::Tiled, false);
    assert_eq!(classify(&healthy).status, PovertyStatus::NearPoor);

    let ill = create_test_profile(700_000, 0, HouseType::Permanent, FloorType::Tiled, true);
    assert_eq!(classify(&ill).status, PovertyStatus::Poor);
}

#[test]
fn test_aggravators_do_not_sink_the_middle_band() {
    // Above the poverty line, housing and health mark vulnerability but do
    // not classify the household as poor.
    let profile = create_test_profile(950_000, 2, HouseType::WoodBamboo, FloorType::Dirt, true);
    let outcome = classify(&profile);
    assert_eq!(outcome.status, PovertyStatus::NearPoor);
    assert_eq!(
        outcome.reason,
        "Penghasilan rendah disertai kondisi rumah atau kesehatan yang menambah kerentanan keluarga."
    );
}
