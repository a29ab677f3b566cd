use std::io::Write;

use behavior_tree::{
    Action, Behavior, BuildError, Registry, Status, StructuralError, TreeBuilder, TreeDescription,
};

#[derive(Default)]
struct Robot {
    log: Vec<String>,
    door_open: bool,
}

fn registry() -> Registry<Robot> {
    let mut registry = Registry::new();

    registry
        .register("Say", |name, config| {
            let line = config.get("text").unwrap_or(name).to_string();
            Ok(Box::new(Action::new(move |robot: &mut Robot| {
                robot.log.push(line.clone());
                Status::Success
            })) as Box<dyn Behavior<Robot>>)
        })
        .unwrap();

    registry
        .register_condition("IsDoorOpen", |robot: &Robot| robot.door_open)
        .unwrap();

    registry
        .register_action("OpenDoor", |robot: &mut Robot| {
            robot.log.push("open".to_string());
            robot.door_open = true;
            Status::Success
        })
        .unwrap();

    registry
}

const MISSION_RON: &str = r#"
#![enable(implicit_some)]
(
    main_tree: "MainTree",
    trees: [
        (
            id: "MainTree",
            root: (
                kind: "Sequence",
                name: "Mission",
                children: [
                    (kind: "Say", attributes: {"text": "approach"}),
                    (kind: "SubTree", attributes: {"id": "EnsureDoorOpen"}),
                    (kind: "Say", name: "enter"),
                    (kind: "SubTree", attributes: {"id": "EnsureDoorOpen"}),
                ],
            ),
        ),
        (
            id: "EnsureDoorOpen",
            root: (
                kind: "Fallback",
                children: [
                    (kind: "IsDoorOpen"),
                    (kind: "OpenDoor"),
                ],
            ),
        ),
    ],
)
"#;

const MISSION_JSON: &str = r#"{
    "trees": [
        {
            "id": "MainTree",
            "root": {
                "kind": "Sequence",
                "children": [
                    {"kind": "Say", "attributes": {"text": "approach"}},
                    {
                        "kind": "Fallback",
                        "children": [{"kind": "IsDoorOpen"}, {"kind": "OpenDoor"}]
                    },
                    {"kind": "Say", "name": "enter"}
                ]
            }
        }
    ]
}"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn ron_file_builds_and_runs() {
    let file = write_temp(".ron", MISSION_RON);
    let description = TreeDescription::from_path(file.path()).unwrap();

    let registry = registry();
    let mut tree = TreeBuilder::new(&registry).build(&description).unwrap();

    let mut robot = Robot::default();
    assert_eq!(tree.tick_root(&mut robot), Status::Success);
    // The second door check sees the door the first fallback opened
    assert_eq!(robot.log, ["approach", "open", "enter"]);
}

#[test]
fn json_file_builds_and_runs() {
    let file = write_temp(".json", MISSION_JSON);
    let description = TreeDescription::from_path(file.path()).unwrap();

    let registry = registry();
    let mut tree = TreeBuilder::new(&registry).build(&description).unwrap();

    let mut robot = Robot {
        door_open: true,
        ..Robot::default()
    };
    assert_eq!(tree.tick_root(&mut robot), Status::Success);
    assert_eq!(robot.log, ["approach", "enter"]);
}

#[test]
fn missing_file_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    let err = TreeDescription::from_path(dir.path().join("absent.ron")).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Structural(StructuralError::Unreadable { .. })
    ));
}

#[test]
fn garbage_is_rejected_by_the_parser() {
    let file = write_temp(".ron", "<root main_tree_to_execute=\"MainTree\">");
    let err = TreeDescription::from_path(file.path()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Structural(StructuralError::Ron(_))
    ));

    let file = write_temp(".json", "{\"trees\": [");
    let err = TreeDescription::from_path(file.path()).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Structural(StructuralError::Json(_))
    ));
}

#[test]
fn multiple_trees_need_a_selector() {
    let text = MISSION_RON.replace("main_tree: \"MainTree\",", "");
    let description = TreeDescription::from_ron(&text).unwrap();

    let registry = registry();
    let err = TreeBuilder::new(&registry).build(&description).unwrap_err();
    assert!(matches!(
        err,
        BuildError::Structural(StructuralError::AmbiguousRoot { count: 2 })
    ));

    // Picking one explicitly works
    let tree = TreeBuilder::new(&registry)
        .main_tree("EnsureDoorOpen")
        .build(&description)
        .unwrap();
    assert_eq!(tree.node_count(), 3);
}
