//! End-to-end: a host schema declared through the facade, read through the
//! shared `Record` surface by code that cannot tell real rows from null ones.

use standin::core::error::MemberError;
use standin::{
    DeclinePolicy, Error, ErrorKind, StandinConfig, TypeRegistry, prelude::*, registry_from_toml,
};
use std::sync::Arc;

// ============================================================================
// HOST SCHEMA
// ============================================================================

static ORDER: EntityModel = EntityModel {
    path: "store::Order",
    name: "Order",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("status", ColumnType::String)
            .not_null()
            .with_default("pending"),
        ColumnModel::new("customer_id", ColumnType::Integer).not_null(),
        ColumnModel::new("coupon_code", ColumnType::String),
        ColumnModel::new("total", ColumnType::Decimal).with_default("0.00"),
        ColumnModel::new("notes", ColumnType::Text),
    ],
    associations: &[
        AssociationModel::belongs_to("customer", &CUSTOMER, "customer_id"),
        AssociationModel::has_many("line_items", &LINE_ITEM, "order_id"),
    ],
    validators: &[ValidatorModel::presence("status")],
    methods: &["save"],
};

static CUSTOMER: EntityModel = EntityModel {
    path: "store::Customer",
    name: "Customer",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("name", ColumnType::String).with_default("Guest"),
        ColumnModel::new("account_id", ColumnType::Integer).not_null(),
    ],
    associations: &[
        AssociationModel::belongs_to("account", &ACCOUNT, "account_id"),
        AssociationModel::has_many("orders", &ORDER, "customer_id"),
    ],
    validators: &[],
    methods: &[],
};

static ACCOUNT: EntityModel = EntityModel {
    path: "store::Account",
    name: "Account",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("owner_id", ColumnType::Integer).not_null(),
    ],
    associations: &[AssociationModel::belongs_to("owner", &CUSTOMER, "owner_id")],
    validators: &[],
    methods: &[],
};

static LINE_ITEM: EntityModel = EntityModel {
    path: "store::LineItem",
    name: "LineItem",
    columns: &[ColumnModel::new("id", ColumnType::Integer).not_null()],
    associations: &[],
    validators: &[],
    methods: &[],
};

struct Order;

impl ModelKind for Order {
    const MODEL: &'static EntityModel = &ORDER;
}

struct Customer;

impl ModelKind for Customer {
    const MODEL: &'static EntityModel = &CUSTOMER;
}

standin::null_object!(OrderNullObject mimics Order);
standin::null_object!(
    /// Stands in for a missing customer.
    CustomerNullObject mimics Customer
);

///
/// RealOrder
/// A persisted row, as host code would model it.
///

struct RealOrder {
    status: String,
    customer_id: i64,
}

impl Record for RealOrder {
    fn model(&self) -> &'static EntityModel {
        &ORDER
    }

    fn read(&self, member: &str) -> Result<Value, MemberError> {
        match member {
            "status" => Ok(self.status.clone().into()),
            "customer_id" => Ok(self.customer_id.into()),
            "notes" => Ok(Value::Null),
            _ => Err(MemberError::undefined("Order", member)),
        }
    }
}

fn status_of(record: &dyn Record) -> Result<Value, Error> {
    Ok(record.read("status")?)
}

fn fresh_registry() -> Arc<TypeRegistry> {
    TypeRegistry::shared(StandinConfig::default())
}

// ============================================================================
// TESTS
// ============================================================================

#[test]
fn order_null_object_reads_like_an_order() {
    let order = standin::null::<OrderNullObject>().expect("declare");

    assert!(order.is_null());
    assert_eq!(order.type_name(), "OrderNullObject");
    assert_eq!(order.read("status").expect("status"), Value::from("pending"));
    assert!(
        order.read("coupon_code").is_err(),
        "a column without a default fails like an unknown member"
    );

    let total = order.read("total").expect("total");
    assert!(total.as_decimal().is_some_and(|d| d.is_zero()));

    let items = order.read("line_items").expect("line_items");
    let relation = items.as_relation().expect("relation");
    assert!(relation.is_empty());
    assert_eq!(relation.model().path, "store::LineItem");
}

#[test]
fn required_customer_is_a_nested_null_object() {
    let order = standin::null::<OrderNullObject>().expect("declare");

    let customer = order.read("customer").expect("customer");
    let customer = customer.as_record().expect("nested null object");

    assert_eq!(customer.type_name(), "CustomerNullObject");
    assert_eq!(customer.type_path(), format!("{}::CustomerNullObject", order.type_path()));
    assert_eq!(customer.mimics(), &CUSTOMER);
    assert_eq!(customer.read("name").expect("name"), Value::from("Guest"));

    // the cycle Customer -> Account -> Customer lands back on the same type
    let account = customer.read("account").expect("account");
    let owner = account
        .as_record()
        .expect("account null object")
        .read("owner")
        .expect("owner");
    assert_eq!(owner.as_record().map(NullObject::type_path), Some(customer.type_path()));
}

#[test]
fn undefined_members_fail_for_null_and_real_records_alike() {
    let null_order = standin::null::<OrderNullObject>().expect("declare");
    let real_order = RealOrder {
        status: "shipped".to_string(),
        customer_id: 42,
    };

    let null_err: Error = null_order.read("nonexistent_field").unwrap_err().into();
    let real_err: Error = real_order.read("nonexistent_field").unwrap_err().into();

    assert_eq!(null_err.kind, ErrorKind::UndefinedMember);
    assert_eq!(null_err.kind, real_err.kind);
    assert_eq!(null_err.origin, real_err.origin);
    assert!(null_err.message.contains("nonexistent_field"));

    assert!(!null_order.responds_to("nonexistent_field"));
    assert!(null_order.responds_to("save"));
}

#[test]
fn generic_code_reads_both_records() {
    let null_order = standin::null::<OrderNullObject>().expect("declare");
    let real_order = RealOrder {
        status: "shipped".to_string(),
        customer_id: 42,
    };

    assert_eq!(status_of(&null_order).expect("null"), Value::from("pending"));
    assert_eq!(status_of(&real_order).expect("real"), Value::from("shipped"));
    assert!(!real_order.is_null());
    assert_eq!(real_order.read("customer_id").expect("id"), Value::from(42_i64));
}

#[test]
fn declaration_is_idempotent_per_registry() {
    let registry = fresh_registry();

    let a = standin::null_in::<OrderNullObject>(&registry).expect("first");
    let b = standin::null_in::<OrderNullObject>(&registry).expect("second");

    assert_eq!(a, b);
    assert_eq!(registry.len(), 1);
}

#[test]
fn a_taken_path_conflicts_with_another_model() {
    let registry = fresh_registry();
    registry
        .declare(
            <CustomerNullObject as Path>::PATH,
            <Customer as ModelKind>::MODEL,
        )
        .expect("customer");

    let err: Error = registry
        .declare(<CustomerNullObject as Path>::PATH, &ORDER)
        .unwrap_err()
        .into();

    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[test]
fn null_object_for_declares_by_path() {
    let order = standin::null_object_for("adhoc::OrderStandIn", &ORDER).expect("declare");
    assert_eq!(order.type_name(), "OrderStandIn");

    let err = standin::null_object_for("not a path", &ORDER).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn toml_config_drives_decline_policy_and_suffix() {
    let registry = registry_from_toml(
        r#"
        decline = "absent"
        type_suffix = "Stub"
        "#,
    )
    .expect("config");
    assert_eq!(registry.config().decline, DeclinePolicy::Absent);

    let order = registry
        .null_object("store::OrderStub", &ORDER)
        .expect("declare");

    assert_eq!(order.read("notes").expect("notes"), Value::Null);
    assert!(order.read("nonexistent_field").is_err());

    let customer = order.read("customer").expect("customer");
    assert_eq!(
        customer.as_record().map(NullObject::type_name),
        Some("CustomerStub")
    );
}

#[test]
fn malformed_toml_is_invalid_input() {
    let err = registry_from_toml("decline = 3").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);

    let err = registry_from_toml("type_suffix = \"Not Valid\"").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);

    let err = registry_from_toml("colour = \"blue\"").unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidInput);
}

#[test]
fn version_is_exposed() {
    assert!(!standin::VERSION.is_empty());
}
