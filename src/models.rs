//! Domain models that mirror the SQLite schema and get passed throughout the
//! TUI. These types stay light-weight data holders so other layers can focus
//! on presentation and persistence logic. Each carries a `display_line` helper
//! producing the exact string its panel list renders, which keeps formatting
//! decisions out of the drawing code.

/// An LMS assignment. The attachment path is stored as raw text; an empty
/// string means no attachment was supplied.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub file_path: String,
    pub due_date: String,
}

impl Assignment {
    pub fn display_line(&self) -> String {
        format!("{} (Due: {})", self.title, self.due_date)
    }
}

/// A library book. Quantity counts physical copies and is never range-checked,
/// so negative values survive round trips.
#[derive(Debug, Clone)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub quantity: i64,
}

impl Book {
    pub fn display_line(&self) -> String {
        format!("{} by {} (Qty: {})", self.title, self.author, self.quantity)
    }
}

#[derive(Debug, Clone)]
pub struct Bus {
    pub id: i64,
    pub bus_number: String,
    pub driver_name: String,
}

impl Bus {
    pub fn display_line(&self) -> String {
        format!("{} (Driver: {})", self.bus_number, self.driver_name)
    }
}

#[derive(Debug, Clone)]
pub struct Route {
    pub id: i64,
    pub route_name: String,
    pub pickup_time: String,
}

impl Route {
    pub fn display_line(&self) -> String {
        format!("{} (Pickup: {})", self.route_name, self.pickup_time)
    }
}

#[derive(Debug, Clone)]
pub struct Hostel {
    pub id: i64,
    pub name: String,
}

/// A hostel room, hydrated from the rooms-to-hostels join so the list view can
/// show the owning hostel without a second query.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i64,
    pub room_number: String,
    pub capacity: i64,
    pub hostel_name: String,
}

impl Room {
    pub fn display_line(&self) -> String {
        format!(
            "{} - Room {} (Capacity: {})",
            self.hostel_name, self.room_number, self.capacity
        )
    }
}

#[derive(Debug, Clone)]
pub struct InventoryItem {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub location: String,
}

impl InventoryItem {
    pub fn display_line(&self) -> String {
        format!("{} - Qty: {} ({})", self.name, self.quantity, self.location)
    }
}

#[derive(Debug, Clone)]
pub struct Staff {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub salary: f64,
}

impl Staff {
    pub fn display_line(&self) -> String {
        format!("{} - {} (₹{:.2})", self.name, self.role, self.salary)
    }
}

/// One attendance scan. Several rows per student per day are expected; the
/// table is a scan log, not a daily register.
#[derive(Debug, Clone)]
pub struct AttendanceRecord {
    pub id: i64,
    pub student_name: String,
    pub date: String,
    pub time: String,
    pub status: String,
}

impl AttendanceRecord {
    pub fn display_line(&self) -> String {
        format!("{} - {}", self.student_name, self.time)
    }
}
