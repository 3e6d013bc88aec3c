use ridgeline_catalog::{
    certification_catalog, lookup_role, resources_for, role_catalog, CostType, MAX_PROFICIENCY,
};

#[test]
fn every_declared_role_resolves_to_itself() {
    for role in role_catalog() {
        let resolved = lookup_role(&role.key);
        assert_eq!(resolved.key, role.key, "key `{}` must round-trip", role.key);
        let resolved_title = lookup_role(&role.title);
        assert_eq!(
            resolved_title.key, role.key,
            "title `{}` must resolve to its own record",
            role.title
        );
    }
}

#[test]
fn role_targets_stay_on_the_proficiency_scale() {
    for role in role_catalog() {
        for target in role.required_skills.iter().chain(&role.preferred_skills) {
            assert!(target.level >= 1, "{}: {}", role.key, target.name);
            assert!(target.level <= MAX_PROFICIENCY, "{}: {}", role.key, target.name);
        }
    }
}

#[test]
fn free_resources_have_zero_cost() {
    for role in role_catalog() {
        for target in &role.required_skills {
            if let Some(resources) = resources_for(&target.name) {
                for resource in resources {
                    if resource.cost_type == CostType::Free {
                        assert_eq!(resource.cost, 0, "{}", resource.title);
                    } else {
                        assert!(resource.cost > 0, "{}", resource.title);
                    }
                }
            }
        }
    }
}

#[test]
fn certification_catalog_is_nonempty_and_priced() {
    let catalog = certification_catalog();
    assert!(catalog.len() >= 8);
    for certification in catalog {
        assert!(certification.cost > 0, "{}", certification.name);
        assert!(
            !certification.preparation_resources.is_empty(),
            "{}",
            certification.name
        );
    }
}
