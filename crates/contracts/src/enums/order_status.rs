use serde::{Deserialize, Serialize};

/// Статус заказа на обслуживание (ОТ).
///
/// Линейная прогрессия только вперёд: Pending → Planned → InProgress → Closed.
/// Шаги можно пропускать вперёд, обратных переходов нет, Closed терминален.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum OrderStatus {
    #[default]
    Pending,
    Planned,
    InProgress,
    Closed,
}

impl OrderStatus {
    /// Получить код статуса
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Planned => "planned",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Closed => "closed",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Ожидает",
            OrderStatus::Planned => "Запланирован",
            OrderStatus::InProgress => "В работе",
            OrderStatus::Closed => "Закрыт",
        }
    }

    /// Все статусы в порядке прогрессии (колонки канбана)
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Planned,
            OrderStatus::InProgress,
            OrderStatus::Closed,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "planned" => Some(OrderStatus::Planned),
            "in_progress" => Some(OrderStatus::InProgress),
            "closed" => Some(OrderStatus::Closed),
            _ => None,
        }
    }

    /// Порядковый номер шага в прогрессии
    pub fn rank(&self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Planned => 1,
            OrderStatus::InProgress => 2,
            OrderStatus::Closed => 3,
        }
    }

    /// Следующий шаг прогрессии
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Planned),
            OrderStatus::Planned => Some(OrderStatus::InProgress),
            OrderStatus::InProgress => Some(OrderStatus::Closed),
            OrderStatus::Closed => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Closed)
    }

    /// Допустим ли переход в `target` (только вперёд)
    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        target.rank() > self.rank()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_only() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Planned));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::InProgress));
        assert!(OrderStatus::InProgress.can_transition_to(OrderStatus::Closed));
        assert!(!OrderStatus::Planned.can_transition_to(OrderStatus::Pending));
        assert!(!OrderStatus::Planned.can_transition_to(OrderStatus::Planned));
        assert!(!OrderStatus::Closed.can_transition_to(OrderStatus::InProgress));
    }

    #[test]
    fn test_closed_is_terminal() {
        assert!(OrderStatus::Closed.is_terminal());
        assert_eq!(OrderStatus::Closed.next(), None);
        for status in OrderStatus::all() {
            assert!(!OrderStatus::Closed.can_transition_to(status));
        }
    }

    #[test]
    fn test_codes() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(OrderStatus::from_code("cancelled"), None);
    }
}
