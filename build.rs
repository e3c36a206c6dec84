use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/skills.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    // Validate structure
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let skills = catalog.get("skills").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'skills' field\n\
             The catalog must have a top-level 'skills' array.\n"
        );
    });

    let skills = skills.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'skills' must be an array\n\
             Got: {skills}\n"
        );
    });

    // Validate each skill and the catalog-wide uniqueness constraints
    let total_aliases = validate_skills(skills);

    println!(
        "cargo:warning=Validated catalog: {} skills, {total_aliases} total aliases",
        skills.len()
    );
}

fn validate_skills(skills: &[serde_json::Value]) -> usize {
    let mut seen_ids = HashSet::new();
    let mut seen_slugs = HashSet::new();
    let mut seen_aliases = HashSet::new();
    let mut total_aliases = 0;

    for (i, skill) in skills.iter().enumerate() {
        let skill_id = skill
            .get("id")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_skill_fields(skill, skill_id, i);

        assert!(
            seen_ids.insert(skill_id.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate skill id '{skill_id}' (index {i})\n"
        );

        let slug = skill
            .get("slug")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_lowercase();
        assert!(
            seen_slugs.insert(slug.clone()),
            "\n\nCATALOG BUILD ERROR: Duplicate slug '{slug}' on skill '{skill_id}'\n"
        );

        total_aliases += validate_skill_aliases(skill, skill_id, &mut seen_aliases);
    }

    total_aliases
}

fn validate_skill_fields(skill: &serde_json::Value, skill_id: &str, index: usize) {
    assert!(
        skill.get("id").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Skill at index {index} missing 'id' field\n"
    );
    assert!(
        skill
            .get("slug")
            .and_then(|v| v.as_str())
            .is_some_and(|s| !s.trim().is_empty()),
        "\n\nCATALOG BUILD ERROR: Skill '{skill_id}' (index {index}) missing or empty 'slug' field\n"
    );
    assert!(
        skill.get("name").and_then(|v| v.as_str()).is_some(),
        "\n\nCATALOG BUILD ERROR: Skill '{skill_id}' (index {index}) missing 'name' field\n"
    );
}

fn validate_skill_aliases(
    skill: &serde_json::Value,
    skill_id: &str,
    seen_aliases: &mut HashSet<String>,
) -> usize {
    if let Some(aliases) = skill.get("aliases").and_then(|a| a.as_array()) {
        for (j, alias) in aliases.iter().enumerate() {
            let alias = alias.as_str().unwrap_or_else(|| {
                panic!(
                    "\n\nCATALOG BUILD ERROR: Skill '{skill_id}' alias {j} must be a string\n"
                );
            });
            assert!(
                !alias.trim().is_empty(),
                "\n\nCATALOG BUILD ERROR: Skill '{skill_id}' alias {j} is empty\n"
            );
            assert!(
                seen_aliases.insert(alias.trim().to_lowercase()),
                "\n\nCATALOG BUILD ERROR: Duplicate alias '{alias}' on skill '{skill_id}'\n\
                 Aliases must be unique across the whole catalog.\n"
            );
        }
        aliases.len()
    } else {
        0
    }
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/skills.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
