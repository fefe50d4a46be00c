#[cfg(test)]
mod tests {
    use crate::repository::error::RepositoryError;
    use crate::repository::room::RoomRepository;
    use crate::test_utils::create_test_database;
    use roomboard_entity::types::{NewRoom, RoomPatch};
    use uuid::Uuid;

    async fn create_test_room_repo() -> RoomRepository {
        let db = create_test_database().await.expect("Failed to create test database");
        RoomRepository::new(db)
    }

    fn create_test_room(owner_name: &str, address: &str, rent: f64) -> NewRoom {
        NewRoom {
            owner_name: owner_name.to_string(),
            phone: "9876543210".to_string(),
            address: address.to_string(),
            rent,
            room_type: "single".to_string(),
            available: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_defaults() {
        let repo = create_test_room_repo().await;

        let room = repo
            .insert(create_test_room("Asha", "12 MG Road, Pune", 8000.0))
            .await
            .expect("Room insert should succeed");

        assert!(Uuid::parse_str(&room.room_id).is_ok());
        assert!(room.available);
        assert_eq!(room.owner_name, "Asha");
        assert_eq!(room.rent, 8000.0);
        assert_eq!(room.created_at, room.updated_at);
    }

    #[tokio::test]
    async fn test_insert_honors_explicit_availability() {
        let repo = create_test_room_repo().await;

        let mut new_room = create_test_room("Asha", "12 MG Road, Pune", 8000.0);
        new_room.available = Some(false);

        let room = repo.insert(new_room).await.expect("Room insert should succeed");
        assert!(!room.available);
    }

    #[tokio::test]
    async fn test_insert_rejects_blank_required_field() {
        let repo = create_test_room_repo().await;

        let result = repo.insert(create_test_room("", "12 MG Road, Pune", 8000.0)).await;
        assert!(matches!(result, Err(RepositoryError::Validation { .. })));

        let rooms = repo.get_all().await.expect("Listing should succeed");
        assert!(rooms.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_returns_insertion_order() {
        let repo = create_test_room_repo().await;

        let first = repo
            .insert(create_test_room("Asha", "Pune East", 8000.0))
            .await
            .expect("Room insert should succeed");
        let second = repo
            .insert(create_test_room("Ravi", "Pune West", 9000.0))
            .await
            .expect("Room insert should succeed");
        let third = repo
            .insert(create_test_room("Meena", "Delhi South", 7000.0))
            .await
            .expect("Room insert should succeed");

        let rooms = repo.get_all().await.expect("Listing should succeed");
        let ids: Vec<&str> = rooms.iter().map(|r| r.room_id.as_str()).collect();
        assert_eq!(ids, vec![&first.room_id, &second.room_id, &third.room_id]);
    }

    #[tokio::test]
    async fn test_rent_range_bounds_are_inclusive() {
        let repo = create_test_room_repo().await;
        for (owner, rent) in
            [("A", 4999.0), ("B", 5000.0), ("C", 7000.0), ("D", 9000.0), ("E", 9001.0)]
        {
            repo.insert(create_test_room(owner, "Pune", rent))
                .await
                .expect("Room insert should succeed");
        }

        let rooms = repo
            .find_by_rent_range(Some(5000.0), Some(9000.0))
            .await
            .expect("Rent filter should succeed");
        let rents: Vec<f64> = rooms.iter().map(|r| r.rent).collect();
        assert_eq!(rents, vec![5000.0, 7000.0, 9000.0]);
    }

    #[tokio::test]
    async fn test_rent_range_with_open_bounds() {
        let repo = create_test_room_repo().await;
        for (owner, rent) in [("A", 4000.0), ("B", 6000.0), ("C", 10000.0)] {
            repo.insert(create_test_room(owner, "Pune", rent))
                .await
                .expect("Room insert should succeed");
        }

        let min_only = repo
            .find_by_rent_range(Some(6000.0), None)
            .await
            .expect("Rent filter should succeed");
        assert_eq!(min_only.len(), 2);

        let max_only = repo
            .find_by_rent_range(None, Some(6000.0))
            .await
            .expect("Rent filter should succeed");
        assert_eq!(max_only.len(), 2);

        let unbounded = repo
            .find_by_rent_range(None, None)
            .await
            .expect("Rent filter should succeed");
        assert_eq!(unbounded.len(), 3);
    }

    #[tokio::test]
    async fn test_address_search_is_case_insensitive_substring() {
        let repo = create_test_room_repo().await;
        repo.insert(create_test_room("Asha", "44 Mumbai Central", 12000.0))
            .await
            .expect("Room insert should succeed");
        repo.insert(create_test_room("Ravi", "9 Delhi South", 9000.0))
            .await
            .expect("Room insert should succeed");

        let matched = repo.find_by_address("mumbai").await.expect("Search should succeed");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].owner_name, "Asha");

        let mixed_case = repo.find_by_address("MUMBAI CEN").await.expect("Search should succeed");
        assert_eq!(mixed_case.len(), 1);

        let unmatched = repo.find_by_address("chennai").await.expect("Search should succeed");
        assert!(unmatched.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_only_provided_fields() {
        let repo = create_test_room_repo().await;
        let room = repo
            .insert(create_test_room("Asha", "12 MG Road, Pune", 8000.0))
            .await
            .expect("Room insert should succeed");

        let patch = RoomPatch { rent: Some(9500.0), ..RoomPatch::default() };
        let updated = repo
            .update_by_id(&room.room_id, patch)
            .await
            .expect("Room update should succeed");

        assert_eq!(updated.room_id, room.room_id);
        assert_eq!(updated.rent, 9500.0);
        assert_eq!(updated.owner_name, "Asha");
        assert_eq!(updated.created_at, room.created_at);
        assert!(updated.updated_at >= room.updated_at);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_provided_field() {
        let repo = create_test_room_repo().await;
        let room = repo
            .insert(create_test_room("Asha", "12 MG Road, Pune", 8000.0))
            .await
            .expect("Room insert should succeed");

        let patch = RoomPatch { owner_name: Some(String::new()), ..RoomPatch::default() };
        let result = repo.update_by_id(&room.room_id, patch).await;
        assert!(matches!(result, Err(RepositoryError::Validation { .. })));

        let rooms = repo.get_all().await.expect("Listing should succeed");
        assert_eq!(rooms[0].owner_name, "Asha");
    }

    #[tokio::test]
    async fn test_update_unknown_id_reports_not_found() {
        let repo = create_test_room_repo().await;

        let missing = Uuid::new_v4().simple().to_string();
        let result = repo.update_by_id(&missing, RoomPatch::default()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_malformed_id_reports_invalid_id() {
        let repo = create_test_room_repo().await;

        let result = repo.update_by_id("not-a-room-id", RoomPatch::default()).await;
        assert!(matches!(result, Err(RepositoryError::InvalidId { .. })));
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_room() {
        let repo = create_test_room_repo().await;
        let first = repo
            .insert(create_test_room("Asha", "Pune East", 8000.0))
            .await
            .expect("Room insert should succeed");
        let second = repo
            .insert(create_test_room("Ravi", "Pune West", 9000.0))
            .await
            .expect("Room insert should succeed");

        repo.delete_by_id(&first.room_id).await.expect("Room delete should succeed");

        let rooms = repo.get_all().await.expect("Listing should succeed");
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].room_id, second.room_id);

        let again = repo.delete_by_id(&first.room_id).await;
        assert!(matches!(again, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_malformed_id_leaves_store_untouched() {
        let repo = create_test_room_repo().await;
        repo.insert(create_test_room("Asha", "Pune East", 8000.0))
            .await
            .expect("Room insert should succeed");

        let result = repo.delete_by_id("42").await;
        assert!(matches!(result, Err(RepositoryError::InvalidId { .. })));

        let rooms = repo.get_all().await.expect("Listing should succeed");
        assert_eq!(rooms.len(), 1);
    }
}
