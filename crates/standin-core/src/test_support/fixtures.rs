//! Reflected shop schema shared by core tests.
//!
//! `Order` carries one attribute for every resolution path; the rest exist
//! to be pointed at, including a cycle between `Customer` and `Account`.

use crate::model::{
    AssociationModel, ColumnModel, EntityModel, ValidatorKind, ValidatorModel, ValidatorOption,
};
use standin_primitives::ColumnType;

pub static ORDER: EntityModel = EntityModel {
    path: "shop::Order",
    name: "Order",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("status", ColumnType::String)
            .not_null()
            .with_default("pending"),
        ColumnModel::new("customer_id", ColumnType::Integer).not_null(),
        ColumnModel::new("coupon_id", ColumnType::Integer),
        ColumnModel::new("referrer_id", ColumnType::Integer),
        ColumnModel::new("legacy_customer_id", ColumnType::Integer).not_null(),
        ColumnModel::new("channel_id", ColumnType::Integer).with_default("7"),
        ColumnModel::new("quantity", ColumnType::Integer).with_default("5"),
        ColumnModel::new("weight", ColumnType::Float).with_default("1.5"),
        ColumnModel::new("total", ColumnType::Decimal).with_default("19.99"),
        ColumnModel::new("placed_at", ColumnType::Datetime).with_default("2020-01-01"),
        ColumnModel::new("gift", ColumnType::Boolean).with_default("true"),
        ColumnModel::new("express", ColumnType::Boolean).with_default("false"),
        ColumnModel::new("archived", ColumnType::Boolean).with_default("0"),
        ColumnModel::new("ship_on", ColumnType::Date).with_default("2020-02-02"),
        ColumnModel::new("notes", ColumnType::Text),
        ColumnModel::new("discount", ColumnType::Integer).with_default("ten"),
    ],
    associations: &[
        AssociationModel::belongs_to("customer", &CUSTOMER, "customer_id"),
        AssociationModel::belongs_to("coupon", &COUPON, "coupon_id"),
        AssociationModel::belongs_to("referrer", &CUSTOMER, "referrer_id"),
        AssociationModel::belongs_to("legacy_customer", &LEGACY_CUSTOMER, "legacy_customer_id"),
        AssociationModel::belongs_to("warehouse", &WAREHOUSE, "legacy_warehouse_id"),
        AssociationModel::belongs_to("channel", &CHANNEL, "channel_id"),
        AssociationModel::has_many("line_items", &LINE_ITEM, "order_id"),
        AssociationModel::has_and_belongs_to_many("tags", &TAG),
        AssociationModel::has_one("invoice", &INVOICE, "order_id"),
    ],
    validators: &[
        ValidatorModel::presence("status"),
        ValidatorModel::presence("referrer"),
        ValidatorModel::presence("coupon").with_options(&[ValidatorOption::If("coupon_required?")]),
        ValidatorModel::presence("warehouse"),
        ValidatorModel::new("quantity", ValidatorKind::Numericality),
    ],
    methods: &["save", "total_with_tax"],
};

pub static CUSTOMER: EntityModel = EntityModel {
    path: "shop::Customer",
    name: "Customer",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("name", ColumnType::String).with_default("Guest"),
        ColumnModel::new("account_id", ColumnType::Integer).not_null(),
        ColumnModel::new("loyalty_points", ColumnType::Integer).with_default("0"),
        ColumnModel::new("vip", ColumnType::Boolean).with_default("false"),
    ],
    associations: &[
        AssociationModel::belongs_to("account", &ACCOUNT, "account_id"),
        AssociationModel::has_many("orders", &ORDER, "customer_id"),
        AssociationModel::has_one("profile", &PROFILE, "customer_id"),
    ],
    validators: &[],
    methods: &["display_name"],
};

pub static ACCOUNT: EntityModel = EntityModel {
    path: "shop::Account",
    name: "Account",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("plan", ColumnType::String).with_default("free"),
        ColumnModel::new("owner_id", ColumnType::Integer).not_null(),
    ],
    associations: &[AssociationModel::belongs_to("owner", &CUSTOMER, "owner_id")],
    validators: &[],
    methods: &[],
};

pub static LINE_ITEM: EntityModel = EntityModel {
    path: "shop::LineItem",
    name: "LineItem",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("order_id", ColumnType::Integer).not_null(),
        ColumnModel::new("sku", ColumnType::String),
    ],
    associations: &[AssociationModel::belongs_to("order", &ORDER, "order_id")],
    validators: &[],
    methods: &[],
};

pub static TAG: EntityModel = EntityModel {
    path: "shop::Tag",
    name: "Tag",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("label", ColumnType::String),
    ],
    associations: &[],
    validators: &[],
    methods: &[],
};

pub static COUPON: EntityModel = EntityModel {
    path: "shop::Coupon",
    name: "Coupon",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("code", ColumnType::String),
    ],
    associations: &[],
    validators: &[],
    methods: &[],
};

pub static INVOICE: EntityModel = EntityModel {
    path: "shop::Invoice",
    name: "Invoice",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("order_id", ColumnType::Integer).not_null(),
    ],
    associations: &[AssociationModel::belongs_to("order", &ORDER, "order_id")],
    validators: &[],
    methods: &[],
};

pub static PROFILE: EntityModel = EntityModel {
    path: "shop::Profile",
    name: "Profile",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("customer_id", ColumnType::Integer).not_null(),
        ColumnModel::new("bio", ColumnType::Text),
    ],
    associations: &[],
    validators: &[],
    methods: &[],
};

pub static WAREHOUSE: EntityModel = EntityModel {
    path: "shop::Warehouse",
    name: "Warehouse",
    columns: &[ColumnModel::new("id", ColumnType::Integer).not_null()],
    associations: &[],
    validators: &[],
    methods: &[],
};

pub static CHANNEL: EntityModel = EntityModel {
    path: "shop::Channel",
    name: "Channel",
    columns: &[
        ColumnModel::new("id", ColumnType::Integer).not_null(),
        ColumnModel::new("name", ColumnType::String).with_default("web"),
    ],
    associations: &[],
    validators: &[],
    methods: &[],
};

/// Same short name as `CUSTOMER`, different model.
pub static LEGACY_CUSTOMER: EntityModel = EntityModel {
    path: "legacy::Customer",
    name: "Customer",
    columns: &[ColumnModel::new("id", ColumnType::Integer).not_null()],
    associations: &[],
    validators: &[],
    methods: &[],
};
