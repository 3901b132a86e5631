//! End-to-end pipeline tests: build → transform → render.

use bpgen::{
    fingerprint, generate, render_set, BlueprintFile, Module, PropertySet, Transformation, Value,
};

/// Deletes every leaf and set named "fred"; deletes any set left empty
/// after its contents were visited.
struct RemoveFred;

impl<T> Transformation<T> for RemoveFred {
    fn transform_property(
        &self,
        name: &str,
        value: Value<T>,
        tag: Option<T>,
    ) -> Option<(Value<T>, Option<T>)> {
        (name != "fred").then_some((value, tag))
    }

    fn transform_set_before_contents(
        &self,
        name: &str,
        set: PropertySet<T>,
        tag: Option<T>,
    ) -> Option<(PropertySet<T>, Option<T>)> {
        (name != "fred").then_some((set, tag))
    }

    fn transform_set_after_contents(
        &self,
        _name: &str,
        set: PropertySet<T>,
        tag: Option<T>,
    ) -> Option<(PropertySet<T>, Option<T>)> {
        (!set.is_empty()).then_some((set, tag))
    }
}

#[test]
fn test_transform_remove_property() {
    let mut set: PropertySet = PropertySet::new();
    set.add_property("name", "name").unwrap();
    set.add_property("fred", "12").unwrap();

    let out = set.transformed(&RemoveFred);
    assert_eq!(render_set(&out), "name: \"name\",\n");
}

#[test]
fn test_transform_remove_property_set() {
    let mut set: PropertySet = PropertySet::new();
    set.add_property("name", "name").unwrap();
    set.add_set("fred").unwrap();

    let out = set.transformed(&RemoveFred);
    assert_eq!(render_set(&out), "name: \"name\",\n");
}

#[test]
fn test_transform_removes_set_emptied_by_child_deletions() {
    let mut set: PropertySet = PropertySet::new();
    set.add_property("name", "name").unwrap();
    let sub = set.add_set("sub").unwrap();
    sub.add_property("fred", "12").unwrap();

    // sub is not named fred, but all of its contents are; the
    // after-contents hook then deletes the emptied set, so the rendered
    // text shows neither the header nor the children.
    let out = set.transformed(&RemoveFred);
    assert_eq!(render_set(&out), "name: \"name\",\n");
}

#[test]
fn test_deletion_is_idempotent_against_never_inserted() {
    let mut with_fred: PropertySet = PropertySet::new();
    with_fred.add_property("name", "name").unwrap();
    with_fred.add_property("fred", "12").unwrap();

    let mut without_fred: PropertySet = PropertySet::new();
    without_fred.add_property("name", "name").unwrap();

    assert_eq!(
        render_set(&with_fred.transformed(&RemoveFred)),
        render_set(&without_fred)
    );
}

#[test]
fn test_generate_runs_passes_over_every_module() {
    let mut file: BlueprintFile = BlueprintFile::new();

    let mut module = Module::new("java_import");
    module.properties_mut().add_property("name", "mylib").unwrap();
    module.properties_mut().add_property("fred", "12").unwrap();
    file.add_module(module);

    let mut module = Module::new("java_import");
    module.properties_mut().add_property("name", "otherlib").unwrap();
    module.properties_mut().add_set("fred").unwrap();
    file.add_module(module);

    let text = generate(&file, &[&RemoveFred]);
    assert_eq!(
        text,
        "java_import {\n\
        \x20   name: \"mylib\",\n\
         }\n\
         \n\
         java_import {\n\
        \x20   name: \"otherlib\",\n\
         }\n"
    );
}

#[test]
fn test_generate_from_mixed_sources() {
    let mut module: Module = Module::new("java_import");
    let props = module.properties_mut();
    props.add_property("name", "mylib").unwrap();
    props
        .merge_json(&serde_json::json!({
            "jars": ["mylib.jar"],
            "prefer": false,
        }))
        .unwrap();
    props.add_set("sub").unwrap().add_property("visible", true).unwrap();

    let mut file = BlueprintFile::new();
    file.add_module(module);

    assert_eq!(
        generate(&file, &[]),
        "java_import {\n\
        \x20   name: \"mylib\",\n\
        \x20   jars: [\"mylib.jar\"],\n\
        \x20   prefer: false,\n\
        \x20   sub: {\n\
        \x20       visible: true,\n\
        \x20   },\n\
         }\n"
    );
}

#[test]
fn test_generate_is_byte_stable_and_fingerprints_equal() {
    let mut file: BlueprintFile = BlueprintFile::new();
    let mut module = Module::new("java_import");
    module.properties_mut().add_property("name", "mylib").unwrap();
    file.add_module(module);

    let first = generate(&file, &[&RemoveFred]);
    let second = generate(&file, &[&RemoveFred]);
    assert_eq!(first, second);
    assert_eq!(fingerprint(&first), fingerprint(&second));
}

#[test]
fn test_generate_leaves_input_untouched() {
    let mut file: BlueprintFile = BlueprintFile::new();
    let mut module = Module::new("java_import");
    module.properties_mut().add_property("fred", "12").unwrap();
    file.add_module(module);

    let _ = generate(&file, &[&RemoveFred]);
    assert!(file.modules()[0].properties().contains("fred"));
}
