//! EquipmentSlots - The five item containers on a humanoid

use crate::content::Equipment;
use crate::types::EquipmentSlot;
use std::sync::Arc;
use thiserror::Error;

/// Equip error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("'{item}' cannot be equipped in the {slot:?} slot")]
    SlotMismatch { item: String, slot: EquipmentSlot },
}

/// Equipped items by slot; an empty slot holds `None`
#[derive(Debug, Clone, Default)]
pub struct EquipmentSlots {
    pub left_hand: Option<Arc<Equipment>>,
    pub right_hand: Option<Arc<Equipment>>,
    pub head: Option<Arc<Equipment>>,
    pub body: Option<Arc<Equipment>>,
    pub accessory: Option<Arc<Equipment>>,
}

impl EquipmentSlots {
    pub fn get(&self, slot: EquipmentSlot) -> Option<&Arc<Equipment>> {
        match slot {
            EquipmentSlot::LeftHand => self.left_hand.as_ref(),
            EquipmentSlot::RightHand => self.right_hand.as_ref(),
            EquipmentSlot::Head => self.head.as_ref(),
            EquipmentSlot::Body => self.body.as_ref(),
            EquipmentSlot::Accessory => self.accessory.as_ref(),
        }
    }

    pub fn get_mut(&mut self, slot: EquipmentSlot) -> &mut Option<Arc<Equipment>> {
        match slot {
            EquipmentSlot::LeftHand => &mut self.left_hand,
            EquipmentSlot::RightHand => &mut self.right_hand,
            EquipmentSlot::Head => &mut self.head,
            EquipmentSlot::Body => &mut self.body,
            EquipmentSlot::Accessory => &mut self.accessory,
        }
    }

    /// Put an item in a slot, returning whatever was there
    pub fn replace(&mut self, slot: EquipmentSlot, item: Arc<Equipment>) -> Option<Arc<Equipment>> {
        self.get_mut(slot).replace(item)
    }

    pub fn take(&mut self, slot: EquipmentSlot) -> Option<Arc<Equipment>> {
        self.get_mut(slot).take()
    }

    /// Iterate over occupied slots
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &Arc<Equipment>)> {
        EquipmentSlot::all()
            .iter()
            .filter_map(move |&slot| self.get(slot).map(|item| (slot, item)))
    }
}
