//! Compiled-in sample data standing in for a real data source.
//!
//! Each call builds a fresh collection; screens take ownership of their copy.

use chrono::NaiveDate;

use crate::{
    Category, Customer, CustomerId, CustomerStatus, LineItem, Money, Order, OrderId, OrderStatus,
    Product, ProductId, Rating,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    category: Category,
    supplier: &str,
    rating_tenths: u8,
    in_stock: bool,
    min_order: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(price_cents),
        category,
        supplier: supplier.to_string(),
        rating: Rating::from_tenths(rating_tenths),
        in_stock,
        min_order,
    }
}

/// The four-product catalog.
pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Industrial Steel Pipes",
            "High-quality stainless steel pipes for industrial applications",
            12_000,
            Category::Industrial,
            "SteelCorp Industries",
            48,
            true,
            50,
        ),
        product(
            "2",
            "Organic Cotton Fabric",
            "Premium organic cotton fabric for textile manufacturing",
            1_550,
            Category::Textiles,
            "GreenFiber Co.",
            46,
            true,
            100,
        ),
        product(
            "3",
            "Electronic Components Kit",
            "Comprehensive kit with various electronic components",
            8_500,
            Category::Electronics,
            "TechSupply Ltd",
            49,
            false,
            10,
        ),
        product(
            "4",
            "Pharmaceutical Grade Bottles",
            "Sterile glass bottles for pharmaceutical use",
            250,
            Category::Medical,
            "MedPack Solutions",
            47,
            true,
            500,
        ),
    ]
}

/// The three sample orders.
pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: OrderId::new("ORD-001"),
            products: vec![
                LineItem::new("Industrial Steel Pipes", 50, Money::from_cents(12_000)),
                LineItem::new("Electronic Components Kit", 10, Money::from_cents(8_500)),
            ],
            supplier: "SteelCorp Industries".to_string(),
            status: OrderStatus::Shipped,
            total: Money::from_cents(685_000),
            order_date: date(2024, 1, 15),
            expected_delivery: date(2024, 1, 22),
        },
        Order {
            id: OrderId::new("ORD-002"),
            products: vec![LineItem::new(
                "Organic Cotton Fabric",
                100,
                Money::from_cents(1_550),
            )],
            supplier: "GreenFiber Co.".to_string(),
            status: OrderStatus::Confirmed,
            total: Money::from_cents(155_000),
            order_date: date(2024, 1, 18),
            expected_delivery: date(2024, 1, 25),
        },
        Order {
            id: OrderId::new("ORD-003"),
            products: vec![LineItem::new(
                "Pharmaceutical Grade Bottles",
                500,
                Money::from_cents(250),
            )],
            supplier: "MedPack Solutions".to_string(),
            status: OrderStatus::Pending,
            total: Money::from_cents(125_000),
            order_date: date(2024, 1, 20),
            expected_delivery: date(2024, 1, 28),
        },
    ]
}

/// The four sample customers.
pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: CustomerId::new("CUST-001"),
            name: "John Smith".to_string(),
            email: "john.smith@techcorp.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            company: "TechCorp Solutions".to_string(),
            location: "New York, NY".to_string(),
            join_date: date(2023, 6, 15),
            total_orders: 12,
            total_spent: Money::from_dollars(45_000),
            status: CustomerStatus::Active,
            last_order: date(2024, 1, 18),
        },
        Customer {
            id: CustomerId::new("CUST-002"),
            name: "Sarah Johnson".to_string(),
            email: "sarah.j@greenmanufacturing.com".to_string(),
            phone: "+1 (555) 987-6543".to_string(),
            company: "Green Manufacturing".to_string(),
            location: "Los Angeles, CA".to_string(),
            join_date: date(2023, 8, 22),
            total_orders: 8,
            total_spent: Money::from_dollars(28_500),
            status: CustomerStatus::Active,
            last_order: date(2024, 1, 20),
        },
        Customer {
            id: CustomerId::new("CUST-003"),
            name: "Michael Chen".to_string(),
            email: "m.chen@innovatetech.com".to_string(),
            phone: "+1 (555) 456-7890".to_string(),
            company: "InnovateTech".to_string(),
            location: "San Francisco, CA".to_string(),
            join_date: date(2023, 4, 10),
            total_orders: 15,
            total_spent: Money::from_dollars(67_800),
            status: CustomerStatus::Active,
            last_order: date(2024, 1, 15),
        },
        Customer {
            id: CustomerId::new("CUST-004"),
            name: "Emma Wilson".to_string(),
            email: "emma.w@buildright.com".to_string(),
            phone: "+1 (555) 321-0987".to_string(),
            company: "BuildRight Construction".to_string(),
            location: "Chicago, IL".to_string(),
            join_date: date(2023, 9, 5),
            total_orders: 5,
            total_spent: Money::from_dollars(15_200),
            status: CustomerStatus::Inactive,
            last_order: date(2023, 12, 10),
        },
    ]
}
