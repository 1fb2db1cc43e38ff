//! Output serializers.
//!
//! Two independent emitters consume the sorted record set:
//!
//! - [`xml`] re-renders the normalized catalog markup (the next run's input),
//! - [`table`] renders the packed compile-time table included by the
//!   firmware's storage layer.
//!
//! Both render to in-memory strings; nothing here touches the filesystem.

pub mod table;
pub mod xml;
