use serde::{Deserialize, Serialize};

/// Тип заказа на обслуживание
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderType {
    Preventive,
    #[default]
    Corrective,
}

impl OrderType {
    pub fn code(&self) -> &'static str {
        match self {
            OrderType::Preventive => "preventive",
            OrderType::Corrective => "corrective",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderType::Preventive => "Плановый",
            OrderType::Corrective => "Аварийный",
        }
    }

    pub fn all() -> Vec<OrderType> {
        vec![OrderType::Preventive, OrderType::Corrective]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "preventive" => Some(OrderType::Preventive),
            "corrective" => Some(OrderType::Corrective),
            _ => None,
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
