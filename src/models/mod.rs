pub mod purchase_order;
pub mod rental;
pub mod rental_po_link;

// Re-export core models for easy access
pub use purchase_order::{NewPurchaseOrder, PurchaseOrder};
pub use rental::{NewRental, Rental};
pub use rental_po_link::RentalPoLink;
