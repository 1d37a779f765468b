//! End-to-end tests driving the binding layer the way UI consumers do:
//! controls create bindings, read and write through observers, and react
//! to `current_changed`.

use std::cell::RefCell;
use std::rc::Rc;
use vincular::prelude::*;

/// A minimal text-displaying consumer standing in for a toolkit control.
struct Label {
    id: String,
    text: Rc<RefCell<String>>,
}

impl Label {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            text: Rc::new(RefCell::new(String::new())),
        }
    }

    /// Bind this label's `text` to a source property and keep it updated.
    fn bind_text(
        &self,
        ctx: &BindingContext,
        source: &SharedSource,
        path: &str,
    ) -> Result<(), BindingError> {
        let manager = ctx.get_path(source, path)?;
        manager.add_binding(Binding::new(self.id.clone(), "text", path))?;

        // Seed from the manager's current value, then follow changes.
        *self.text.borrow_mut() = manager.current().to_string();
        let text = Rc::clone(&self.text);
        manager.on_current_changed(move |value| {
            *text.borrow_mut() = value.to_string();
        });
        Ok(())
    }

    fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

fn person() -> SharedSource {
    Record::new()
        .with("Name", Value::text("ada"))
        .with("Age", Value::Int(36))
        .into_source()
}

#[test]
fn test_label_follows_source_property() {
    let ctx = BindingContext::new();
    let source = person();
    let label = Label::new("label1");
    label.bind_text(&ctx, &source, "Name").expect("bind");

    assert_eq!(label.text(), "ada");
    source.set("Name", Value::text("grace")).expect("write");
    assert_eq!(label.text(), "grace");
}

#[test]
fn test_two_labels_share_one_manager() {
    let ctx = BindingContext::new();
    let source = person();
    let first = Label::new("label1");
    let second = Label::new("label2");
    first.bind_text(&ctx, &source, "Name").expect("bind");
    second.bind_text(&ctx, &source, "Name").expect("bind");

    let manager = ctx.get_path(&source, "Name").expect("cached");
    assert_eq!(manager.binding_count(), 2);
    assert_eq!(
        manager.binding_at(0),
        Some(Binding::new("label1", "text", "Name"))
    );
    assert_eq!(
        manager.binding_at(1),
        Some(Binding::new("label2", "text", "Name"))
    );

    source.set("Name", Value::text("hopper")).expect("write");
    assert_eq!(first.text(), "hopper");
    assert_eq!(second.text(), "hopper");
}

#[test]
fn test_rebinding_same_label_is_rejected() {
    let ctx = BindingContext::new();
    let source = person();
    let label = Label::new("label1");
    label.bind_text(&ctx, &source, "Name").expect("bind");

    let err = label.bind_text(&ctx, &source, "Name").expect_err("duplicate");
    assert!(matches!(err, BindingError::DuplicateBinding { .. }));

    let manager = ctx.get_path(&source, "Name").expect("cached");
    assert_eq!(manager.binding_count(), 1);
}

#[test]
fn test_binding_to_unknown_property_fails() {
    let ctx = BindingContext::new();
    let source = person();
    let label = Label::new("label1");

    let err = label
        .bind_text(&ctx, &source, "Nickname")
        .expect_err("unknown path");
    assert!(matches!(err, BindingError::PropertyNotFound { .. }));
}

#[test]
fn test_row_manager_sees_every_property() {
    let ctx = BindingContext::new();
    let source = person();
    let changes = Rc::new(RefCell::new(Vec::new()));
    let changes_cb = Rc::clone(&changes);

    ctx.get(&source).on_current_changed(move |value| {
        changes_cb.borrow_mut().push(value.clone());
    });

    source.set("Name", Value::text("grace")).expect("write");
    source.set("Age", Value::Int(40)).expect("write");
    assert_eq!(
        *changes.borrow(),
        vec![Value::text("grace"), Value::Int(40)]
    );
}

#[test]
fn test_observer_round_trip_through_prelude_types() {
    let source = person();
    let observer = PropertyObserver::new(Rc::clone(&source), PropertyPath::new("Age"));

    assert_eq!(observer.read().expect("Age resolves"), Value::Int(36));
    observer.write(Value::Int(37)).expect("typed write");
    assert_eq!(source.get("Age").expect("Age resolves"), Value::Int(37));

    let err = observer.write(Value::text("old")).expect_err("mismatch");
    assert!(matches!(err, BindingError::TypeMismatch { .. }));
}

#[test]
fn test_binding_serializes_for_tooling() {
    let binding = Binding::new("label1", "text", "user.name");
    let json = serde_json::to_value(&binding).expect("serializable");
    let back: Binding = serde_json::from_value(json).expect("deserializable");
    assert_eq!(binding, back);
}
