//! Menu Snapshot
//!
//! Everything the dashboard shows, as one immutable value. Each transition
//! returns a new `Menu`; the collection is mapped or filtered into a fresh
//! `Vec` and never edited in place.

use crate::error::{MenuAction, MenuError};
use crate::food::{Food, FoodId};

/// User-visible report of the most recent failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Increases with every notice raised, so a stale timer can tell its
    /// notice was already replaced
    pub seq: u64,
    pub action: MenuAction,
    pub detail: String,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        self.action.failure_message()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    foods: Vec<Food>,
    editing: Option<Food>,
    add_form_open: bool,
    edit_form_open: bool,
    loaded: bool,
    load_failed: bool,
    notice: Option<Notice>,
    notices_raised: u64,
}

impl Menu {
    /// A menu that already holds `foods`, as after a successful load
    pub fn from_foods(foods: Vec<Food>) -> Self {
        Self::default().with_foods(foods)
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn find(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    /// Copy of the record targeted by the edit form
    pub fn editing(&self) -> Option<&Food> {
        self.editing.as_ref()
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    pub fn is_edit_form_open(&self) -> bool {
        self.edit_form_open
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The last load attempt failed and nothing is loaded yet.
    /// Outlives the notice, so the view can keep offering a retry.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // ========================
    // Collection transitions
    // ========================

    /// Replace the collection wholesale
    pub fn with_foods(&self, foods: Vec<Food>) -> Menu {
        Menu {
            foods,
            loaded: true,
            load_failed: false,
            ..self.clone()
        }
    }

    pub fn with_food_appended(&self, food: Food) -> Menu {
        let mut foods = Vec::with_capacity(self.foods.len() + 1);
        foods.extend(self.foods.iter().cloned());
        foods.push(food);
        Menu {
            foods,
            ..self.clone()
        }
    }

    /// Swap in `food` at the position of the entry with the same id.
    /// An id that is no longer present leaves the collection unchanged.
    pub fn with_food_replaced(&self, food: &Food) -> Menu {
        let foods = self
            .foods
            .iter()
            .map(|f| if f.id != food.id { f.clone() } else { food.clone() })
            .collect();
        Menu {
            foods,
            ..self.clone()
        }
    }

    pub fn without_food(&self, id: FoodId) -> Menu {
        let foods = self.foods.iter().filter(|f| f.id != id).cloned().collect();
        Menu {
            foods,
            ..self.clone()
        }
    }

    // ========================
    // Edit selection and forms
    // ========================

    /// Store a copy of `food` as the edit selection and open the edit form
    pub fn with_selection(&self, food: &Food) -> Menu {
        Menu {
            editing: Some(food.clone()),
            edit_form_open: true,
            ..self.clone()
        }
    }

    pub fn with_selection_cleared(&self) -> Menu {
        Menu {
            editing: None,
            edit_form_open: false,
            ..self.clone()
        }
    }

    pub fn with_add_form(&self, open: bool) -> Menu {
        Menu {
            add_form_open: open,
            ..self.clone()
        }
    }

    pub fn with_edit_form(&self, open: bool) -> Menu {
        Menu {
            edit_form_open: open,
            ..self.clone()
        }
    }

    // ========================
    // Notices
    // ========================

    pub fn with_notice(&self, action: MenuAction, error: &MenuError) -> Menu {
        let seq = self.notices_raised + 1;
        Menu {
            load_failed: self.load_failed || (action == MenuAction::Load && !self.loaded),
            notice: Some(Notice {
                seq,
                action,
                detail: error.to_string(),
            }),
            notices_raised: seq,
            ..self.clone()
        }
    }

    pub fn without_notice(&self) -> Menu {
        Menu {
            notice: None,
            ..self.clone()
        }
    }

    /// Clear the notice only if it is still the one numbered `seq`
    pub fn without_notice_seq(&self, seq: u64) -> Menu {
        match &self.notice {
            Some(notice) if notice.seq == seq => self.without_notice(),
            _ => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    fn food(id: FoodId, name: &str) -> Food {
        Food {
            id,
            image: format!("http://img/{id}.png"),
            name: name.to_string(),
            description: String::new(),
            price: "10.00".to_string(),
            available: true,
        }
    }

    fn ids(menu: &Menu) -> Vec<FoodId> {
        menu.foods().iter().map(|f| f.id).collect()
    }

    #[test]
    fn test_default_menu_is_empty_and_unloaded() {
        let menu = Menu::default();
        assert!(menu.foods().is_empty());
        assert!(!menu.is_loaded());
        assert!(menu.editing().is_none());
        assert!(menu.notice().is_none());
    }

    #[test]
    fn test_replace_keeps_order_and_leaves_others() {
        let menu = Menu::from_foods(vec![food(1, "A"), food(2, "B"), food(3, "C")]);
        let mut changed = food(2, "B2");
        changed.price = "1.00".to_string();

        let next = menu.with_food_replaced(&changed);

        assert_eq!(ids(&next), vec![1, 2, 3]);
        assert_eq!(next.foods()[1], changed);
        assert_eq!(next.foods()[0], menu.foods()[0]);
        assert_eq!(next.foods()[2], menu.foods()[2]);
        // previous snapshot untouched
        assert_eq!(menu.foods()[1].name, "B");
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let menu = Menu::from_foods(vec![food(1, "A")]);
        assert_eq!(menu.with_food_replaced(&food(9, "Z")), menu);
    }

    #[test]
    fn test_without_food_removes_only_that_id() {
        let menu = Menu::from_foods(vec![food(1, "A"), food(2, "B"), food(3, "C")]);
        let next = menu.without_food(2);
        assert_eq!(ids(&next), vec![1, 3]);
        assert_eq!(menu.foods().len(), 3);
    }

    #[test]
    fn test_selection_is_a_copy_and_opens_form() {
        let menu = Menu::from_foods(vec![food(1, "A")]);
        let next = menu.with_selection(&menu.foods()[0]);
        assert_eq!(next.editing(), Some(&food(1, "A")));
        assert!(next.is_edit_form_open());

        let cleared = next.with_selection_cleared();
        assert!(cleared.editing().is_none());
        assert!(!cleared.is_edit_form_open());
    }

    #[test]
    fn test_stale_notice_seq_does_not_clear_newer_notice() {
        let error = MenuError::Remote {
            action: MenuAction::Delete,
            source: ApiError::Transport("offline".to_string()),
        };
        let first = Menu::default().with_notice(MenuAction::Delete, &error);
        let first_seq = first.notice().map(|n| n.seq).unwrap();
        let second = first.with_notice(MenuAction::Create, &error);

        let after_stale_timer = second.without_notice_seq(first_seq);
        assert_eq!(after_stale_timer.notice().map(|n| n.action), Some(MenuAction::Create));

        let second_seq = second.notice().map(|n| n.seq).unwrap();
        assert!(second.without_notice_seq(second_seq).notice().is_none());
    }

    #[test]
    fn test_other_writes_keep_the_current_notice() {
        let error = MenuError::Remote {
            action: MenuAction::Delete,
            source: ApiError::Transport("offline".to_string()),
        };
        let menu = Menu::from_foods(vec![food(1, "A")]).with_notice(MenuAction::Delete, &error);
        let seq = menu.notice().map(|n| n.seq);

        let next = menu
            .with_food_appended(food(2, "B"))
            .with_add_form(true)
            .with_selection(&food(1, "A"))
            .without_food(2);

        assert_eq!(next.notice().map(|n| n.seq), seq);
    }

    #[test]
    fn test_load_failure_outlives_its_notice() {
        let error = MenuError::Remote {
            action: MenuAction::Load,
            source: ApiError::Transport("offline".to_string()),
        };
        let failed = Menu::default().with_notice(MenuAction::Load, &error);
        assert!(failed.load_failed());
        assert!(failed.without_notice().load_failed());

        // other failures leave the flag alone, a successful load clears it
        let loaded = Menu::from_foods(vec![food(1, "A")]);
        assert!(!loaded.with_notice(MenuAction::Delete, &error).load_failed());
        assert!(!failed.with_foods(vec![]).load_failed());
    }

    #[test]
    fn test_notice_message_and_detail() {
        let error = MenuError::Remote {
            action: MenuAction::Load,
            source: ApiError::Status {
                status: 500,
                text: "Internal Server Error".to_string(),
            },
        };
        let menu = Menu::default().with_notice(MenuAction::Load, &error);
        let notice = menu.notice().unwrap();
        assert_eq!(notice.message(), "Could not load the menu");
        assert_eq!(notice.detail, "load failed: HTTP 500: Internal Server Error");
    }
}
