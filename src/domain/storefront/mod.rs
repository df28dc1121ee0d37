//! Storefront domain module.
//!
//! The read-only store data a session answers from: products, collections,
//! customer, cart and the page the widget is on.

mod collection;
mod customer;
mod page_context;
mod product;
mod snapshot;

pub use collection::{find_collection, Collection};
pub use customer::{Cart, Customer};
pub use page_context::{PageContext, PageKind};
pub use product::Product;
pub use snapshot::{
    RawCart, RawCollection, RawCustomer, RawPageContext, RawProduct, RawScalar, RawStoreSnapshot,
    StoreSnapshot,
};
