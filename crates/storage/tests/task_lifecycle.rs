#![forbid(unsafe_code)]

use nd_core::ids::{CollectionId, TaskId};
use nd_storage::{
    CollectionCreateRequest, SqliteStore, StoreError, TaskCreateRequest, TaskUpdateRequest,
};
use std::path::PathBuf;

fn temp_dir(test_name: &str) -> PathBuf {
    let base = std::env::temp_dir();
    let pid = std::process::id();
    let nonce = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    let dir = base.join(format!("nd_storage_{test_name}_{pid}_{nonce}"));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn setup(test_name: &str) -> (SqliteStore, CollectionId) {
    let mut store = SqliteStore::open(temp_dir(test_name)).expect("open store");
    let collection = store
        .create_collection(CollectionCreateRequest {
            name: "school".to_string(),
        })
        .expect("create collection");
    (store, collection.id)
}

fn create_task(store: &mut SqliteStore, collection_id: CollectionId, title: &str) -> TaskId {
    store
        .create_task(TaskCreateRequest {
            title: title.to_string(),
            collection_id,
            date_ms: None,
            parent_id: None,
        })
        .expect("create task")
        .id
}

fn create_subtask(
    store: &mut SqliteStore,
    collection_id: CollectionId,
    parent_id: TaskId,
    title: &str,
) -> TaskId {
    store
        .create_task(TaskCreateRequest {
            title: title.to_string(),
            collection_id,
            date_ms: None,
            parent_id: Some(parent_id),
        })
        .expect("create subtask")
        .id
}

#[test]
fn create_task_validates_title_and_references() {
    let (mut store, collection) = setup("create_task_validates_title_and_references");

    let err = store
        .create_task(TaskCreateRequest {
            title: "".to_string(),
            collection_id: collection,
            date_ms: None,
            parent_id: None,
        })
        .expect_err("expected empty title to fail");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "title must not be empty"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = store
        .create_task(TaskCreateRequest {
            title: "Essay".to_string(),
            collection_id: CollectionId::new(999),
            date_ms: None,
            parent_id: None,
        })
        .expect_err("expected missing collection to fail");
    match err {
        StoreError::UnknownCollection => {}
        other => panic!("expected UnknownCollection, got {other:?}"),
    }

    let err = store
        .create_task(TaskCreateRequest {
            title: "Intro".to_string(),
            collection_id: collection,
            date_ms: None,
            parent_id: Some(TaskId::new(999)),
        })
        .expect_err("expected missing parent to fail");
    match err {
        StoreError::UnknownTask => {}
        other => panic!("expected UnknownTask, got {other:?}"),
    }
}

#[test]
fn nesting_stops_at_one_level() {
    let (mut store, collection) = setup("nesting_stops_at_one_level");
    let essay = create_task(&mut store, collection, "Essay");
    let intro = create_subtask(&mut store, collection, essay, "Intro");

    let err = store
        .create_task(TaskCreateRequest {
            title: "Intro of intro".to_string(),
            collection_id: collection,
            date_ms: None,
            parent_id: Some(intro),
        })
        .expect_err("expected grandchild to be rejected");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "parent is already a subtask"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn listing_attaches_subtasks_to_their_parents() {
    let (mut store, collection) = setup("listing_attaches_subtasks_to_their_parents");
    let essay = create_task(&mut store, collection, "Essay");
    let reading = create_task(&mut store, collection, "Reading");
    let intro = create_subtask(&mut store, collection, essay, "Intro");
    let conclusion = create_subtask(&mut store, collection, essay, "Conclusion");

    let trees = store
        .list_tasks_by_collection(collection)
        .expect("list tasks");
    assert_eq!(trees.len(), 2);

    let essay_tree = trees
        .iter()
        .find(|t| t.task.id == essay)
        .expect("essay listed");
    let subtask_ids: Vec<TaskId> = essay_tree.subtasks.iter().map(|t| t.id).collect();
    assert_eq!(subtask_ids, vec![intro, conclusion]);

    let reading_tree = trees
        .iter()
        .find(|t| t.task.id == reading)
        .expect("reading listed");
    assert!(reading_tree.subtasks.is_empty());
}

#[test]
fn listing_an_empty_collection_is_empty_not_an_error() {
    let (store, collection) = setup("listing_an_empty_collection_is_empty_not_an_error");
    let trees = store
        .list_tasks_by_collection(collection)
        .expect("list tasks");
    assert!(trees.is_empty());

    let err = store
        .list_tasks_by_collection(CollectionId::new(999))
        .expect_err("expected missing collection to fail");
    match err {
        StoreError::UnknownCollection => {}
        other => panic!("expected UnknownCollection, got {other:?}"),
    }
}

#[test]
fn update_applies_only_provided_fields() {
    let (mut store, collection) = setup("update_applies_only_provided_fields");
    let task = store
        .create_task(TaskCreateRequest {
            title: "Essay".to_string(),
            collection_id: collection,
            date_ms: Some(1_700_000_000_000),
            parent_id: None,
        })
        .expect("create task");

    let updated = store
        .update_task(
            task.id,
            TaskUpdateRequest {
                title: Some("Final essay".to_string()),
                ..Default::default()
            },
        )
        .expect("update title");
    assert_eq!(updated.title, "Final essay");
    assert_eq!(updated.date_ms, Some(1_700_000_000_000));
    assert!(!updated.completed);

    let cleared = store
        .update_task(
            task.id,
            TaskUpdateRequest {
                date_ms: Some(None),
                ..Default::default()
            },
        )
        .expect("clear date");
    assert_eq!(cleared.date_ms, None);
    assert_eq!(cleared.title, "Final essay");

    let err = store
        .update_task(task.id, TaskUpdateRequest::default())
        .expect_err("expected empty patch to fail");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "no fields to update"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = store
        .update_task(TaskId::new(999), TaskUpdateRequest {
            completed: Some(true),
            ..Default::default()
        })
        .expect_err("expected missing task to fail");
    match err {
        StoreError::UnknownTask => {}
        other => panic!("expected UnknownTask, got {other:?}"),
    }
}

#[test]
fn reparenting_validates_the_new_parent() {
    let (mut store, collection) = setup("reparenting_validates_the_new_parent");
    let essay = create_task(&mut store, collection, "Essay");
    let reading = create_task(&mut store, collection, "Reading");
    let intro = create_subtask(&mut store, collection, essay, "Intro");

    let moved = store
        .update_task(
            reading,
            TaskUpdateRequest {
                parent_id: Some(Some(essay)),
                ..Default::default()
            },
        )
        .expect("adopt reading under essay");
    assert_eq!(moved.parent_id, Some(essay));

    let err = store
        .update_task(
            essay,
            TaskUpdateRequest {
                parent_id: Some(Some(intro)),
                ..Default::default()
            },
        )
        .expect_err("expected subtask parent to be rejected");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "parent is already a subtask"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = store
        .update_task(
            essay,
            TaskUpdateRequest {
                parent_id: Some(Some(essay)),
                ..Default::default()
            },
        )
        .expect_err("expected self-parenting to be rejected");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "task cannot be its own parent"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let notes = create_task(&mut store, collection, "Notes");
    let err = store
        .update_task(
            essay,
            TaskUpdateRequest {
                parent_id: Some(Some(notes)),
                ..Default::default()
            },
        )
        .expect_err("expected parent with subtasks to be rejected");
    match err {
        StoreError::InvalidInput(msg) => {
            assert_eq!(msg, "task with subtasks cannot become a subtask");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let promoted = store
        .update_task(
            intro,
            TaskUpdateRequest {
                parent_id: Some(None),
                ..Default::default()
            },
        )
        .expect("promote intro to top level");
    assert_eq!(promoted.parent_id, None);
}

#[test]
fn a_parent_in_another_collection_is_rejected() {
    let (mut store, school) = setup("a_parent_in_another_collection_is_rejected");
    let personal = store
        .create_collection(CollectionCreateRequest {
            name: "personal".to_string(),
        })
        .expect("create second collection")
        .id;
    let essay = create_task(&mut store, school, "Essay");
    let groceries = create_task(&mut store, personal, "Groceries");

    let err = store
        .create_task(TaskCreateRequest {
            title: "Milk".to_string(),
            collection_id: personal,
            date_ms: None,
            parent_id: Some(essay),
        })
        .expect_err("expected cross-collection parent to be rejected");
    match err {
        StoreError::InvalidInput(msg) => {
            assert_eq!(msg, "parent belongs to a different collection");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = store
        .update_task(
            groceries,
            TaskUpdateRequest {
                parent_id: Some(Some(essay)),
                ..Default::default()
            },
        )
        .expect_err("expected cross-collection re-parent to be rejected");
    match err {
        StoreError::InvalidInput(msg) => {
            assert_eq!(msg, "parent belongs to a different collection");
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    // The rejected task keeps its place in its own collection's listing.
    let trees = store
        .list_tasks_by_collection(personal)
        .expect("list personal");
    let listed: Vec<TaskId> = trees.iter().map(|t| t.task.id).collect();
    assert_eq!(listed, vec![groceries]);
}

#[test]
fn toggle_flips_a_single_task_only() {
    let (mut store, collection) = setup("toggle_flips_a_single_task_only");
    let essay = create_task(&mut store, collection, "Essay");
    let intro = create_subtask(&mut store, collection, essay, "Intro");

    let toggled = store.toggle_task_completion(essay).expect("toggle");
    assert!(toggled.completed);

    let intro_row = store
        .get_task(intro)
        .expect("get subtask")
        .expect("subtask exists");
    assert!(!intro_row.completed, "subtask must keep its own state");

    let toggled = store.toggle_task_completion(essay).expect("toggle back");
    assert!(!toggled.completed);
}

#[test]
fn reorder_orders_listing_within_the_sibling_group() {
    let (mut store, collection) = setup("reorder_orders_listing_within_the_sibling_group");
    let t1 = create_task(&mut store, collection, "one");
    let t2 = create_task(&mut store, collection, "two");
    let t3 = create_task(&mut store, collection, "three");

    store
        .reorder_siblings(&[t3, t1, t2])
        .expect("reorder siblings");

    let trees = store
        .list_tasks_by_collection(collection)
        .expect("list tasks");
    let listed: Vec<TaskId> = trees.iter().map(|t| t.task.id).collect();
    assert_eq!(listed, vec![t3, t1, t2]);
}

#[test]
fn a_task_created_after_a_reorder_lists_last() {
    let (mut store, collection) = setup("a_task_created_after_a_reorder_lists_last");
    let t1 = create_task(&mut store, collection, "one");
    let t2 = create_task(&mut store, collection, "two");

    store.reorder_siblings(&[t2, t1]).expect("reorder siblings");
    let t3 = create_task(&mut store, collection, "three");

    let trees = store
        .list_tasks_by_collection(collection)
        .expect("list tasks");
    let listed: Vec<TaskId> = trees.iter().map(|t| t.task.id).collect();
    assert_eq!(listed, vec![t2, t1, t3], "unordered rows go after ordered");
}

#[test]
fn reorder_rejects_mixed_sibling_groups() {
    let (mut store, collection) = setup("reorder_rejects_mixed_sibling_groups");
    let essay = create_task(&mut store, collection, "Essay");
    let intro = create_subtask(&mut store, collection, essay, "Intro");

    let err = store
        .reorder_siblings(&[essay, intro])
        .expect_err("expected mixed group to fail");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "tasks are not siblings"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }

    let err = store
        .reorder_siblings(&[])
        .expect_err("expected empty reorder to fail");
    match err {
        StoreError::InvalidInput(msg) => assert_eq!(msg, "no tasks to reorder"),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}
