//! Общие типы домена обслуживания оборудования: коллекции, DTO форм,
//! расчёт наступающих регламентов и группировка заказов.
//!
//! Крейт не выполняет ввода-вывода и собирается как для backend, так и для
//! wasm frontend.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
pub mod usecases;
