//! In-memory repository behind the JSON API.
//!
//! Each collection sits behind its own mutex. Operations that touch several
//! collections lock them in the order players, chores, events.

pub mod seed;

use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calendar::{event_occurrences, occurrences_between, Occurrence};
use crate::display;
use crate::error::{AppError, Result};
use crate::form;
use crate::grocery::{self, BudgetCheck};
use crate::housing::{self, HouseSummary, RotationStrategy, RotationSummary};
use crate::models::{
    CalendarEvent, Chore, ChoreDraft, ChoreStatus, EventDraft, FoodOrder, GroceryItem, House,
    Message, MessageDraft, OrderDraft, OrderLine, Player, PlayerDraft, PlayerStatus,
};
use crate::roster::{self, ImportSummary};

struct Table<T> {
    rows: Vec<T>,
    next_id: u32,
}

impl<T> Table<T> {
    fn seeded(rows: Vec<T>, id_of: fn(&T) -> u32) -> Self {
        let next_id = rows.iter().map(id_of).max().unwrap_or(0) + 1;
        Self { rows, next_id }
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex.lock().map_err(|_| AppError::StorePoisoned)
}

/// Optional filters for the roster list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerFilter {
    pub house: Option<House>,
    pub status: Option<PlayerStatus>,
}

/// Counts shown on the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub players: usize,
    pub available_players: usize,
    pub injured_players: usize,
    pub open_chores: usize,
    pub events: usize,
    pub food_orders: usize,
    pub messages: usize,
}

pub struct Store {
    players: Mutex<Table<Player>>,
    chores: Mutex<Table<Chore>>,
    events: Mutex<Table<CalendarEvent>>,
    orders: Mutex<Table<FoodOrder>>,
    messages: Mutex<Table<Message>>,
    catalog: Vec<GroceryItem>,
    budget_cap_cents: u32,
}

impl Store {
    /// A store holding the dashboard's mock data.
    pub fn seeded(budget_cap_cents: u32) -> Self {
        Self {
            players: Mutex::new(Table::seeded(seed::players(), |p| p.id)),
            chores: Mutex::new(Table::seeded(seed::chores(), |c| c.id)),
            events: Mutex::new(Table::seeded(seed::events(), |e| e.id)),
            orders: Mutex::new(Table::seeded(Vec::<FoodOrder>::new(), |o| o.id)),
            messages: Mutex::new(Table::seeded(seed::messages(), |m| m.id)),
            catalog: grocery::default_catalog(),
            budget_cap_cents,
        }
    }

    // Players

    pub fn list_players(&self, filter: &PlayerFilter) -> Result<Vec<Player>> {
        let players = lock(&self.players)?;
        Ok(players
            .rows
            .iter()
            .filter(|p| filter.house.map_or(true, |h| p.house == h))
            .filter(|p| filter.status.map_or(true, |s| p.status == s))
            .cloned()
            .collect())
    }

    pub fn get_player(&self, id: u32) -> Result<Player> {
        let players = lock(&self.players)?;
        players
            .rows
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Player", id))
    }

    pub fn create_player(&self, draft: PlayerDraft) -> Result<Player> {
        let mut players = lock(&self.players)?;
        let player = Player::from_draft(players.next_id, draft);
        form::validate_player(&player).map_err(AppError::Validation)?;
        players.allocate_id();
        players.rows.push(player.clone());
        info!(player_id = player.id, house = %player.house, "player added");
        Ok(player)
    }

    pub fn update_player(&self, id: u32, draft: PlayerDraft) -> Result<Player> {
        let mut players = lock(&self.players)?;
        let slot = players
            .rows
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::not_found("Player", id))?;
        let updated = Player::from_draft(id, draft);
        form::validate_player(&updated).map_err(AppError::Validation)?;
        *slot = updated.clone();
        debug!(player_id = id, "player updated");
        Ok(updated)
    }

    /// Removes a player and drops them from chore and event assignments.
    pub fn delete_player(&self, id: u32) -> Result<()> {
        let mut players = lock(&self.players)?;
        let before = players.rows.len();
        players.rows.retain(|p| p.id != id);
        if players.rows.len() == before {
            return Err(AppError::not_found("Player", id));
        }

        let mut chores = lock(&self.chores)?;
        for chore in chores.rows.iter_mut() {
            chore.assigned_players.retain(|&p| p != id);
        }
        let mut events = lock(&self.events)?;
        for event in events.rows.iter_mut() {
            event.selected_players.retain(|&p| p != id);
        }

        info!(player_id = id, "player removed");
        Ok(())
    }

    pub fn house_summaries(&self) -> Result<Vec<HouseSummary>> {
        let players = lock(&self.players)?;
        let chores = lock(&self.chores)?;
        Ok(housing::summarize_houses(&players.rows, &chores.rows))
    }

    // Chores

    pub fn list_chores(&self, house: Option<House>) -> Result<Vec<Chore>> {
        let chores = lock(&self.chores)?;
        Ok(chores
            .rows
            .iter()
            .filter(|c| house.map_or(true, |h| c.house == h))
            .cloned()
            .collect())
    }

    pub fn create_chore(&self, draft: ChoreDraft) -> Result<Chore> {
        let players = lock(&self.players)?;
        let known: Vec<u32> = players.rows.iter().map(|p| p.id).collect();
        let mut chores = lock(&self.chores)?;

        let chore = Chore::from_draft(chores.next_id, draft);
        form::validate_chore(&chore, &known).map_err(AppError::Validation)?;
        chores.allocate_id();
        chores.rows.push(chore.clone());
        info!(chore_id = chore.id, house = %chore.house, "chore created");
        Ok(chore)
    }

    pub fn delete_chore(&self, id: u32) -> Result<()> {
        let mut chores = lock(&self.chores)?;
        let before = chores.rows.len();
        chores.rows.retain(|c| c.id != id);
        if chores.rows.len() == before {
            return Err(AppError::not_found("Chore", id));
        }
        Ok(())
    }

    pub fn complete_chore(&self, id: u32) -> Result<Chore> {
        let mut chores = lock(&self.chores)?;
        let chore = chores
            .rows
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found("Chore", id))?;
        chore.status = ChoreStatus::Completed;
        Ok(chore.clone())
    }

    pub fn rotate_chores<R: Rng + ?Sized>(
        &self,
        house: House,
        strategy: RotationStrategy,
        rng: &mut R,
    ) -> Result<RotationSummary> {
        let players = lock(&self.players)?;
        let mut chores = lock(&self.chores)?;
        let summary = housing::rotate_chores(&mut chores.rows, &players.rows, house, strategy, rng)
            .map_err(AppError::Validation)?;
        info!(
            house = %house,
            chores = summary.assignments.len(),
            ?strategy,
            "chores rotated"
        );
        for chore in chores.rows.iter().filter(|c| c.house == house && c.is_open()) {
            debug!(
                chore_id = chore.id,
                assignees = ?display::format_assignees(chore, &players.rows),
                "chore reassigned"
            );
        }
        Ok(summary)
    }

    // Calendar

    pub fn list_events(&self) -> Result<Vec<CalendarEvent>> {
        Ok(lock(&self.events)?.rows.clone())
    }

    pub fn create_event(&self, draft: EventDraft) -> Result<CalendarEvent> {
        let players = lock(&self.players)?;
        let mut events = lock(&self.events)?;

        let event = CalendarEvent::from_draft(events.next_id, draft);
        form::validate_event(&event).map_err(AppError::Validation)?;
        if let Some(unknown) = event
            .selected_players
            .iter()
            .find(|id| !players.rows.iter().any(|p| p.id == **id))
        {
            return Err(AppError::Validation(format!("Unknown player: {}", unknown)));
        }

        events.allocate_id();
        events.rows.push(event.clone());
        info!(event_id = event.id, recurrence = ?event.recurrence.kind, "event created");
        Ok(event)
    }

    pub fn delete_event(&self, id: u32) -> Result<()> {
        let mut events = lock(&self.events)?;
        let before = events.rows.len();
        events.rows.retain(|e| e.id != id);
        if events.rows.len() == before {
            return Err(AppError::not_found("Event", id));
        }
        Ok(())
    }

    pub fn event_occurrences(&self, id: u32) -> Result<Vec<Occurrence>> {
        let events = lock(&self.events)?;
        let event = events
            .rows
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::not_found("Event", id))?;
        Ok(event_occurrences(event))
    }

    pub fn calendar(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Occurrence>> {
        if to < from {
            return Err(AppError::Validation(
                "'to' must not be before 'from'".to_string(),
            ));
        }
        let events = lock(&self.events)?;
        Ok(occurrences_between(&events.rows, from, to))
    }

    // Food orders

    pub fn catalog(&self) -> &[GroceryItem] {
        &self.catalog
    }

    pub fn check_budget(&self, lines: &[OrderLine]) -> Result<BudgetCheck> {
        grocery::check_order(lines, &self.catalog, self.budget_cap_cents)
            .map_err(AppError::Validation)
    }

    pub fn submit_order(&self, draft: OrderDraft) -> Result<FoodOrder> {
        let house = self.get_player(draft.player_id)?.house;
        let check = self.check_budget(&draft.lines)?;
        if !check.can_submit {
            return Err(AppError::BudgetExceeded(check));
        }

        let mut orders = lock(&self.orders)?;
        let order = FoodOrder {
            id: orders.allocate_id(),
            player_id: draft.player_id,
            house,
            delivery_date: draft.delivery_date,
            lines: draft.lines,
            total_cents: check.total_cents,
            submitted_at: Utc::now(),
        };
        orders.rows.push(order.clone());
        info!(
            order_id = order.id,
            player_id = order.player_id,
            total_cents = order.total_cents,
            "food order submitted"
        );
        Ok(order)
    }

    pub fn list_orders(&self) -> Result<Vec<FoodOrder>> {
        Ok(lock(&self.orders)?.rows.clone())
    }

    // Messages

    pub fn list_messages(&self, channel: Option<&str>) -> Result<Vec<Message>> {
        let messages = lock(&self.messages)?;
        Ok(messages
            .rows
            .iter()
            .filter(|m| channel.map_or(true, |c| m.channel.eq_ignore_ascii_case(c)))
            .cloned()
            .collect())
    }

    pub fn post_message(&self, sender: &str, draft: MessageDraft) -> Result<Message> {
        form::validate_message(&draft.channel, &draft.body).map_err(AppError::Validation)?;
        let mut messages = lock(&self.messages)?;
        let message = Message {
            id: messages.allocate_id(),
            channel: draft.channel.trim().to_string(),
            sender: sender.to_string(),
            body: draft.body.trim().to_string(),
            sent_at: Utc::now(),
        };
        messages.rows.push(message.clone());
        Ok(message)
    }

    // Admin

    pub fn overview(&self) -> Result<Overview> {
        let players = lock(&self.players)?;
        let chores = lock(&self.chores)?;
        let events = lock(&self.events)?;
        let food_orders = lock(&self.orders)?.rows.len();
        let messages = lock(&self.messages)?.rows.len();

        Ok(Overview {
            players: players.rows.len(),
            available_players: players.rows.iter().filter(|p| p.is_available()).count(),
            injured_players: players
                .rows
                .iter()
                .filter(|p| p.status == PlayerStatus::Injured)
                .count(),
            open_chores: chores.rows.iter().filter(|c| c.is_open()).count(),
            events: events.rows.len(),
            food_orders,
            messages,
        })
    }

    pub fn export_roster(&self) -> Result<Vec<u8>> {
        let players = lock(&self.players)?;
        roster::export_roster_csv(&players.rows)
    }

    /// Upserts players from a roster CSV. Rows that fail validation are
    /// skipped and reported.
    pub fn import_roster(&self, data: &[u8]) -> Result<ImportSummary> {
        let parsed = roster::parse_roster_csv(data)?;
        let mut summary = ImportSummary {
            skipped: parsed.skipped,
            ..ImportSummary::default()
        };

        let mut players = lock(&self.players)?;
        for row in parsed.rows {
            let existing = row
                .id
                .and_then(|id| players.rows.iter().position(|p| p.id == id));
            let id = existing.map_or(players.next_id, |index| players.rows[index].id);
            let player = Player::from_draft(id, row.draft);

            if let Err(reason) = form::validate_player(&player) {
                summary.skipped.push(format!(
                    "{} {}: {}",
                    player.first_name, player.last_name, reason
                ));
                continue;
            }

            match existing {
                Some(index) => {
                    players.rows[index] = player;
                    summary.updated += 1;
                }
                None => {
                    players.allocate_id();
                    players.rows.push(player);
                    summary.created += 1;
                }
            }
        }

        info!(
            created = summary.created,
            updated = summary.updated,
            skipped = summary.skipped.len(),
            "roster imported"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::budget::BudgetLevel;
    use crate::models::{AssignmentType, ChorePriority};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store() -> Store {
        Store::seeded(3500)
    }

    fn draft_from(player: &Player) -> PlayerDraft {
        PlayerDraft {
            first_name: player.first_name.clone(),
            last_name: player.last_name.clone(),
            position: player.position.clone(),
            age: player.age,
            nationality: player.nationality.clone(),
            house: player.house,
            room: player.room.clone(),
            contract_period: player.contract_period.clone(),
            status: player.status,
            phone_number: player.phone_number.clone(),
            emergency_contact: player.emergency_contact.clone(),
            medical_info: player.medical_info.clone(),
            special_notes: player.special_notes.clone(),
            join_date: player.join_date,
        }
    }

    #[test]
    fn test_create_player_assigns_next_id() {
        let store = store();
        let mut draft = draft_from(&seed::players()[0]);
        draft.first_name = "Felix".to_string();

        let created = store.create_player(draft).unwrap();

        assert_eq!(created.id, 10);
        assert_eq!(store.get_player(10).unwrap().first_name, "Felix");
    }

    #[test]
    fn test_invalid_player_does_not_consume_id() {
        let store = store();
        let mut bad = draft_from(&seed::players()[0]);
        bad.age = 3;
        assert!(matches!(
            store.create_player(bad),
            Err(AppError::Validation(_))
        ));

        let created = store.create_player(draft_from(&seed::players()[1])).unwrap();
        assert_eq!(created.id, 10);
    }

    #[test]
    fn test_filter_players() {
        let store = store();
        let filter = PlayerFilter {
            house: Some(House::Widdersdorf2),
            status: None,
        };
        let players = store.list_players(&filter).unwrap();
        assert_eq!(players.len(), 3);
        assert!(players.iter().all(|p| p.house == House::Widdersdorf2));

        let injured = store
            .list_players(&PlayerFilter {
                house: None,
                status: Some(PlayerStatus::Injured),
            })
            .unwrap();
        assert_eq!(injured.len(), 1);
    }

    #[test]
    fn test_delete_player_cleans_assignments() {
        let store = store();
        store.delete_player(1).unwrap();

        assert!(matches!(store.get_player(1), Err(AppError::NotFound { .. })));
        let chores = store.list_chores(None).unwrap();
        assert!(chores.iter().all(|c| !c.assigned_players.contains(&1)));
        let events = store.list_events().unwrap();
        assert!(events.iter().all(|e| !e.selected_players.contains(&1)));
        assert!(store.delete_player(1).is_err());
    }

    #[test]
    fn test_create_and_complete_chore() {
        let store = store();
        let chore = store
            .create_chore(ChoreDraft {
                title: "Mow the lawn".to_string(),
                priority: ChorePriority::Low,
                house: House::Widdersdorf3,
                assignment_type: AssignmentType::Individual,
                assigned_players: vec![7],
                deadline: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
                points: 10,
                description: String::new(),
            })
            .unwrap();
        assert_eq!(chore.status, ChoreStatus::Pending);

        let done = store.complete_chore(chore.id).unwrap();
        assert_eq!(done.status, ChoreStatus::Completed);

        let w3 = store
            .house_summaries()
            .unwrap()
            .into_iter()
            .find(|s| s.house == House::Widdersdorf3)
            .unwrap();
        assert_eq!(w3.completed_chores, 1);
        assert_eq!(w3.points_earned, 10);
    }

    #[test]
    fn test_rotate_chores_through_store() {
        let store = store();
        let mut rng = StdRng::seed_from_u64(7);
        let summary = store
            .rotate_chores(House::Widdersdorf1, RotationStrategy::RoundRobin, &mut rng)
            .unwrap();
        // Weber is injured, leaving Bisinger and Hassan.
        assert_eq!(summary.players, 2);
        assert_eq!(summary.assignments.len(), 2);
    }

    #[test]
    fn test_calendar_window() {
        let store = store();
        let from = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let to = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let week = store.calendar(from, to).unwrap();

        // Training Mon/Wed/Fri, language Tue/Thu, match Saturday.
        assert_eq!(week.len(), 6);
        assert!(store.calendar(to, from).is_err());
    }

    #[test]
    fn test_order_over_budget_rejected() {
        let store = store();
        // Chicken breast at €8.99 x 4 = €35.96
        let lines = vec![OrderLine { item_id: 6, quantity: 4 }];
        let result = store.submit_order(OrderDraft {
            player_id: 1,
            delivery_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            lines,
        });
        match result {
            Err(AppError::BudgetExceeded(check)) => {
                assert_eq!(check.total_cents, 3596);
                assert_eq!(check.level, BudgetLevel::Exceeded);
            }
            other => panic!("expected budget error, got {:?}", other),
        }
        assert!(store.list_orders().unwrap().is_empty());
    }

    #[test]
    fn test_order_within_budget_stored_with_house() {
        let store = store();
        let order = store
            .submit_order(OrderDraft {
                player_id: 4,
                delivery_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                lines: vec![OrderLine { item_id: 1, quantity: 2 }],
            })
            .unwrap();
        assert_eq!(order.house, House::Widdersdorf2);
        assert_eq!(order.total_cents, 498);
        assert_eq!(store.overview().unwrap().food_orders, 1);
    }

    #[test]
    fn test_messages_filter_by_channel() {
        let store = store();
        store
            .post_message(
                "admin@fckoln.de",
                MessageDraft {
                    channel: "Widdersdorf 1".to_string(),
                    body: "Pizza night!".to_string(),
                },
            )
            .unwrap();
        let w1 = store.list_messages(Some("widdersdorf 1")).unwrap();
        assert_eq!(w1.len(), 2);
        assert_eq!(w1[1].body, "Pizza night!");
    }

    #[test]
    fn test_roster_export_import_upserts() {
        let store = store();
        let exported = store.export_roster().unwrap();
        let mut csv = String::from_utf8(exported).unwrap();
        csv.push_str(",Tim,Fischer,Winger,17,Germany,Widdersdorf 3,304,2025-2027,active,+49 221 9,,,,2025-01-15\n");
        csv.push_str(",Baby,Player,Winger,9,Germany,Widdersdorf 3,305,,active,+49 221 9,,,,2025-01-15\n");

        let summary = store.import_roster(csv.as_bytes()).unwrap();

        assert_eq!(summary.updated, 9);
        assert_eq!(summary.created, 1);
        assert_eq!(summary.skipped.len(), 1);
        assert_eq!(store.get_player(10).unwrap().last_name, "Fischer");
    }
}
