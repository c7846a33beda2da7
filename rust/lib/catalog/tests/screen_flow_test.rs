/// Integration tests for full admin-screen flows across controllers.

use std::sync::Arc;

use showroom_catalog::*;
use showroom_core::{CatalogConfig, CatalogError, SequentialIds, ValidationError};

fn orders(records: &[EntityRecord]) -> Vec<u32> {
    records.iter().map(|r| r.order).collect()
}

fn assert_contiguous(records: &[EntityRecord]) {
    let expected: Vec<u32> = (1..=records.len() as u32).collect();
    assert_eq!(orders(records), expected);
}

#[test]
fn test_fuel_type_add_move_delete() {
    let seed = vec![EntityRecord::new("1", "بنزين", 1).with_attributes(Attributes::MultiAssociated {
        selected_ids: vec!["camry".into()],
    })];
    let mut fuels = ListController::new(EntityConfig::fuel_types(), CatalogConfig::default())
        .with_ids(Arc::new(SequentialIds::new("fuel-", 100)))
        .with_records(seed);

    let diesel = fuels
        .add(Draft::named("ديزل").with_selection(vec!["camry".into()]))
        .unwrap();
    assert_eq!(diesel.order, 2);

    fuels.enter_sortable();
    fuels.move_up(1).unwrap();
    fuels.exit_sortable();

    assert_eq!(fuels.delete("1"), Ok(true));

    let remaining = fuels.records();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, diesel.id);
    assert_eq!(remaining[0].name, "ديزل");
    assert_eq!(remaining[0].order, 1);
}

#[test]
fn test_loaded_snapshot_is_normalized() {
    let snapshot = vec![
        EntityRecord::new("t", "Toyota", 5),
        EntityRecord::new("n", "Nissan", 2),
        EntityRecord::new("t", "Toyota (copy)", 7),
    ];
    let mut brands = ListController::new(EntityConfig::brands(), CatalogConfig::default())
        .with_ids(Arc::new(SequentialIds::new("b", 1)))
        .with_records(snapshot);
    assert_contiguous(brands.records());
    assert_eq!(brands.len(), 2);

    brands.add(Draft::named("Kia")).unwrap();
    assert_contiguous(brands.records());

    brands.delete("t").unwrap();
    assert!(brands.get("t").is_none());
    assert_contiguous(brands.records());
}

#[test]
fn test_orders_stay_contiguous() {
    let mut brands = ListController::new(EntityConfig::brands(), CatalogConfig::default())
        .with_ids(Arc::new(SequentialIds::new("b", 1)));
    for name in ["Toyota", "Nissan", "Kia", "Hyundai", "Ford"] {
        brands.add(Draft::named(name)).unwrap();
        assert_contiguous(brands.records());
    }

    brands.update("b3", Draft::named("KIA")).unwrap();
    assert_contiguous(brands.records());

    brands.delete("b1").unwrap();
    assert_contiguous(brands.records());

    brands.enter_sortable();
    brands.move_to(0, 3).unwrap();
    assert_contiguous(brands.records());

    let mut reversed = brands.records().to_vec();
    reversed.reverse();
    brands.reorder(&reversed).unwrap();
    assert_contiguous(brands.records());
    brands.exit_sortable();

    brands.delete("b5").unwrap();
    assert_contiguous(brands.records());
    assert_eq!(brands.len(), 3);
}

#[test]
fn test_brand_model_fuel_screens() {
    let feedback = Arc::new(RecordingFeedback::new());
    let config = CatalogConfig::default();

    let mut brands = ListController::new(EntityConfig::brands(), config.clone())
        .with_ids(Arc::new(SequentialIds::new("brand-", 1)))
        .with_feedback(feedback.clone());
    let mut models = ListController::new(EntityConfig::models(), config.clone())
        .with_ids(Arc::new(SequentialIds::new("model-", 1)))
        .with_feedback(feedback.clone());
    let mut fuels = ListController::new(EntityConfig::fuel_types(), config)
        .with_ids(Arc::new(SequentialIds::new("fuel-", 1)))
        .with_feedback(feedback.clone());

    let toyota = brands.add(Draft::named("Toyota")).unwrap();

    // Model editor picks its parent from the brand list.
    let mut editor = models.open_create(brands.records());
    editor.set_name("Camry");
    assert_eq!(editor.first_error(), Some(ValidationError::MissingParent));
    editor.select_parent(&toyota.id);
    let camry = editor.submit(&mut models).unwrap();

    let mut editor = models.open_create(brands.records());
    editor.set_name("Land Cruiser");
    editor.select_parent(&toyota.id);
    let cruiser = editor.submit(&mut models).unwrap();

    assert_eq!(models.label_for(&camry, brands.records()), "Toyota");

    // Fuel editor picks models as chips.
    let mut editor = fuels.open_create(models.records());
    editor.set_name("ديزل");
    assert!(!editor.can_submit());
    editor.toggle(&camry.id);
    editor.toggle(&cruiser.id);
    let diesel = fuels.add(editor.draft()).unwrap();
    assert_eq!(
        fuels.label_for(&diesel, models.records()),
        "Camry، Land Cruiser"
    );

    // Deleting a model leaves the fuel type's reference dangling.
    models.delete(&cruiser.id).unwrap();
    assert_eq!(fuels.label_for(&diesel, models.records()), "Camry");
    assert_eq!(fuels.get(&diesel.id).unwrap().attributes.selected_ids().len(), 2);

    assert_eq!(
        feedback.toasts(),
        vec![
            "تمت إضافة ماركة جديد بنجاح".to_string(),
            "تمت إضافة موديل جديد بنجاح".to_string(),
            "تمت إضافة موديل جديد بنجاح".to_string(),
            "تمت إضافة نوع وقود جديد بنجاح".to_string(),
            "تم حذف موديل بنجاح".to_string(),
        ]
    );
}

#[test]
fn test_validation_gating_per_preset() {
    for entity in EntityConfig::dealership_presets() {
        let mut ctl = ListController::new(entity.clone(), CatalogConfig::default());

        for blank in ["", "  "] {
            let err = ctl.add(Draft::named(blank)).unwrap_err();
            assert_eq!(err.as_validation(), Some(&ValidationError::EmptyName), "{}", entity.key);
        }

        let bare = ctl.add(Draft::named("x"));
        match &entity.capability {
            Capability::SingleParent { .. } => {
                assert_eq!(bare, Err(CatalogError::Validation(ValidationError::MissingParent)));
            }
            Capability::MultiAssociated { .. } => {
                assert_eq!(bare, Err(CatalogError::Validation(ValidationError::EmptySelection)));
            }
            Capability::Plain | Capability::Colored => assert!(bare.is_ok(), "{}", entity.key),
        }

        let full = Draft::named("y")
            .with_color("#1B3A70")
            .with_parent("p")
            .with_selection(vec!["s".into()]);
        assert!(ctl.add(full).is_ok(), "{}", entity.key);
    }
}

#[test]
fn test_delete_confirmation_dialog() {
    let mut colors = ListController::new(EntityConfig::colors(), CatalogConfig::default())
        .with_ids(Arc::new(SequentialIds::new("c", 1)));
    colors.add(Draft::named("أحمر").with_color("#FF0000")).unwrap();
    colors.add(Draft::named("أزرق").with_color("#0000FF")).unwrap();

    assert_eq!(colors.request_delete("c1").unwrap().name, "أحمر");
    let prompt = colors.delete_prompt().unwrap();
    assert_eq!(prompt.title, "حذف لون");
    assert_eq!(prompt.body, "هل أنت متأكد من حذف \"أحمر\"؟");
    assert_eq!(prompt.confirm, "حذف");
    assert_eq!(prompt.cancel, "إلغاء");

    colors.confirm_delete().unwrap();
    assert_eq!(colors.len(), 1);
    assert_eq!(colors.records()[0].name, "أزرق");
    assert_eq!(colors.records()[0].order, 1);
}

#[test]
fn test_records_serialize_for_presentation() {
    let mut statuses = ListController::new(EntityConfig::legal_statuses(), CatalogConfig::default())
        .with_ids(Arc::new(SequentialIds::new("s", 1)));
    statuses.add(Draft::named("مرهون").with_color("#C0392B")).unwrap();
    statuses.add(Draft::named("سليم").with_color("#27ae60")).unwrap();

    let json = serde_json::to_value(statuses.records()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "s1", "name": "مرهون", "order": 1, "hexCode": "#C0392B"},
            {"id": "s2", "name": "سليم", "order": 2, "hexCode": "#27ae60"}
        ])
    );

    let back: Vec<EntityRecord> = serde_json::from_value(json).unwrap();
    assert_eq!(back, statuses.records());
}

#[test]
fn test_config_from_args_drives_screens() {
    let args: Vec<String> = ["--locale=en", "--search-threshold=2", "--separator= / "]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let config = CatalogConfig::from_args(&args);

    let feedback = Arc::new(RecordingFeedback::new());
    let models = vec![
        EntityRecord::new("1", "Camry", 1),
        EntityRecord::new("2", "Corolla", 2),
        EntityRecord::new("3", "Yaris", 3),
    ];
    let mut drives = ListController::new(EntityConfig::drive_types(), config)
        .with_ids(Arc::new(SequentialIds::new("d", 1)))
        .with_feedback(feedback.clone());

    let editor = drives.open_create(&models);
    assert!(editor.shows_search());

    let awd = drives
        .add(Draft::named("AWD").with_selection(vec!["1".into(), "3".into()]))
        .unwrap();
    assert_eq!(drives.label_for(&awd, &models), "Camry / Yaris");
    assert_eq!(feedback.toasts(), vec!["نظام دفع added successfully".to_string()]);
}
