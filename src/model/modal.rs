//! Modal stack for managing overlays
//!
//! Only the top modal receives input; everything below it stays drawn.

use super::vendor::VendorId;

/// Entries of the per-vendor actions menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorAction {
    ViewDetails,
    RunAudit,
    GenerateReport,
    Suspend,
}

impl VendorAction {
    pub const ALL: [VendorAction; 4] = [
        VendorAction::ViewDetails,
        VendorAction::RunAudit,
        VendorAction::GenerateReport,
        VendorAction::Suspend,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VendorAction::ViewDetails => "View Details",
            VendorAction::RunAudit => "Run Audit",
            VendorAction::GenerateReport => "Generate Report",
            VendorAction::Suspend => "Suspend Vendor",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, VendorAction::Suspend)
    }
}

/// Entries of the account menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountAction {
    Profile,
    Settings,
    Team,
    LogOut,
}

impl AccountAction {
    pub const ALL: [AccountAction; 4] = [
        AccountAction::Profile,
        AccountAction::Settings,
        AccountAction::Team,
        AccountAction::LogOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountAction::Profile => "Profile",
            AccountAction::Settings => "Settings",
            AccountAction::Team => "Team",
            AccountAction::LogOut => "Log out",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, AccountAction::LogOut)
    }
}

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    QuitConfirm,
    Help,
    Notifications,
    AccountMenu { selected_index: usize },
    VendorActions {
        vendor_id: VendorId,
        selected_index: usize,
    },
    VendorDetails { vendor_id: VendorId },
}

impl Modal {
    /// Number of selectable entries, for menus
    pub fn entry_count(&self) -> usize {
        match self {
            Modal::AccountMenu { .. } => AccountAction::ALL.len(),
            Modal::VendorActions { .. } => VendorAction::ALL.len(),
            _ => 0,
        }
    }

    pub fn selected_index_mut(&mut self) -> Option<&mut usize> {
        match self {
            Modal::AccountMenu { selected_index } => Some(selected_index),
            Modal::VendorActions { selected_index, .. } => Some(selected_index),
            _ => None,
        }
    }
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Move the highlighted entry of the top menu, clamped to its entries
    pub fn move_selection(&mut self, up: bool) {
        if let Some(modal) = self.stack.last_mut() {
            let count = modal.entry_count();
            if let Some(selected) = modal.selected_index_mut() {
                if up {
                    *selected = selected.saturating_sub(1);
                } else if *selected + 1 < count {
                    *selected += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        stack.push(Modal::Notifications);

        assert_eq!(stack.pop(), Some(Modal::Notifications));
        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert!(stack.is_empty());
    }


    #[test]
    fn test_move_selection_clamps() {
        let mut stack = ModalStack::new();
        stack.push(Modal::VendorActions {
            vendor_id: VendorId::new("1"),
            selected_index: 0,
        });

        stack.move_selection(true);
        for _ in 0..10 {
            stack.move_selection(false);
        }

        match stack.top() {
            Some(Modal::VendorActions { selected_index, .. }) => {
                assert_eq!(*selected_index, VendorAction::ALL.len() - 1)
            }
            other => panic!("unexpected modal {:?}", other),
        }
    }

    #[test]
    fn test_move_selection_ignores_non_menus() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Notifications);
        stack.move_selection(false);
        assert_eq!(stack.top(), Some(&Modal::Notifications));
    }
}
