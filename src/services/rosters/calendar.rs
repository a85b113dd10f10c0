use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use chrono::Datelike;
use tracing::warn;

use super::RosterService;
use crate::calendar::{
    WeeklySlot, current_week_start, event_to_slot, format_event_datetime, parse_event_datetime,
    slot_to_event, week_start, weekday_name,
};
use crate::errors::Result;
use crate::models::{
    ApiResponse, ErrorCode,
    rosters::{
        entities::Roster,
        requests::{MoveRosterRequest, RosterCalendarParams},
        responses::{RosterCalendarResponse, RosterEvent},
    },
};
use crate::services::{error_response, not_found};

fn to_event(roster: Roster, week: chrono::NaiveDate) -> Result<RosterEvent> {
    let span = slot_to_event(
        roster.day_of_week.as_deref(),
        &roster.start_time,
        &roster.end_time,
        week,
    )?;

    Ok(RosterEvent {
        id: roster.id,
        class_id: roster.class_id,
        subject_id: roster.subject_id,
        teacher_id: roster.teacher_id,
        classroom_id: roster.classroom_id,
        day_of_week: weekday_name(span.start.weekday()).to_string(),
        start: format_event_datetime(span.start),
        end: format_event_datetime(span.end),
    })
}

fn parse_move(move_data: &MoveRosterRequest) -> Result<WeeklySlot> {
    let start = parse_event_datetime(&move_data.start)?;
    let end = parse_event_datetime(&move_data.end)?;
    event_to_slot(start, end)
}

pub async fn get_calendar(
    service: &RosterService,
    params: RosterCalendarParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let week = params.week_of.map(week_start).unwrap_or_else(current_week_start);

    let rosters = match storage.list_rosters(params.filters).await {
        Ok(rosters) => rosters,
        Err(e) => {
            return Ok(error_response("Roster calendar", ErrorCode::RosterOperationFailed, e));
        }
    };

    let mut events = Vec::with_capacity(rosters.len());
    for roster in rosters {
        let roster_id = roster.id;
        match to_event(roster, week) {
            Ok(event) => events.push(event),
            // 历史数据中的非法时间段不影响整周视图
            Err(e) => warn!("Skipping roster {} in calendar: {}", roster_id, e),
        }
    }

    let response = RosterCalendarResponse {
        week_start: week,
        events,
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Roster calendar retrieved successfully",
    )))
}

pub async fn move_roster(
    service: &RosterService,
    roster_id: i64,
    move_data: MoveRosterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let slot = match parse_move(&move_data) {
        Ok(slot) => slot,
        Err(e) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::RosterTimeInvalid, e.message())));
        }
    };

    let storage = service.get_storage(request);

    match storage.move_roster(roster_id, slot).await {
        Ok(Some(roster)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(roster, "Roster moved successfully"))),
        Ok(None) => Ok(not_found(ErrorCode::RosterNotFound, "Roster not found")),
        Err(e) => Ok(error_response("Move roster", ErrorCode::RosterOperationFailed, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test::TestRequest, web};
    use chrono::NaiveDate;
    use serde::de::DeserializeOwned;
    use serde_json::{Value, json};
    use std::sync::Arc;

    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    fn roster(day: Option<&str>, start: &str, end: &str) -> Roster {
        Roster {
            id: 7,
            class_id: 1,
            subject_id: 2,
            teacher_id: 3,
            classroom_id: 4,
            day_of_week: day.map(str::to_string),
            start_time: start.to_string(),
            end_time: end.to_string(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_to_event_places_slot_in_week() {
        let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let event = to_event(roster(Some("Wednesday"), "09:00", "10:30"), monday).unwrap();

        assert_eq!(event.id, 7);
        assert_eq!(event.start, "2024-09-04T09:00");
        assert_eq!(event.end, "2024-09-04T10:30");
    }

    #[test]
    fn test_to_event_without_day_uses_monday() {
        let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let event = to_event(roster(None, "08:15", "09:00"), monday).unwrap();

        assert_eq!(event.day_of_week, "Monday");
        assert_eq!(event.start, "2024-09-02T08:15");
        assert_eq!(event.end, "2024-09-02T09:00");
    }

    #[test]
    fn test_to_event_rejects_broken_slot() {
        let monday = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        assert!(to_event(roster(Some("Monday"), "11:00", "10:00"), monday).is_err());
    }

    #[test]
    fn test_parse_move() {
        let slot = parse_move(&MoveRosterRequest {
            start: "2024-09-06T14:00".to_string(),
            end: "2024-09-06T15:15".to_string(),
        })
        .unwrap();
        assert_eq!(slot.day_of_week, "Friday");
        assert_eq!(slot.start_time, "14:00");
        assert_eq!(slot.end_time, "15:15");

        assert!(
            parse_move(&MoveRosterRequest {
                start: "2024-09-06T14:00".to_string(),
                end: "2024-09-07T09:00".to_string(),
            })
            .is_err()
        );
        assert!(
            parse_move(&MoveRosterRequest {
                start: "tomorrow".to_string(),
                end: "2024-09-06T15:15".to_string(),
            })
            .is_err()
        );
    }

    fn body<T: DeserializeOwned>(value: Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[actix_web::test]
    async fn test_roster_without_day_shows_on_monday() {
        let storage: Arc<dyn Storage> = Arc::new(SeaOrmStorage::in_memory().await);
        let teacher = storage
            .create_teacher(body(json!({"first_name": "Bilal", "last_name": "Omar"})))
            .await
            .unwrap();
        let class = storage
            .create_class(body(json!({"name": "3C"})))
            .await
            .unwrap();
        let subject = storage
            .create_subject(body(json!({"name": "Seerah"})))
            .await
            .unwrap();
        let classroom = storage
            .create_classroom(body(json!({"name": "Hall"})))
            .await
            .unwrap();

        let req = TestRequest::default()
            .app_data(web::Data::new(storage.clone()))
            .to_http_request();
        let service = RosterService::new_lazy();

        let created = service
            .create_roster(
                body(json!({
                    "class_id": class.id,
                    "subject_id": subject.id,
                    "teacher_id": teacher.id,
                    "classroom_id": classroom.id,
                    "start_time": "10:00",
                    "end_time": "10:45"
                })),
                &req,
            )
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let params = RosterCalendarParams {
            week_of: NaiveDate::from_ymd_opt(2024, 9, 5),
            ..Default::default()
        };
        let resp = service.get_calendar(params, &req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body()).await.unwrap();
        let payload: Value = serde_json::from_slice(&bytes).unwrap();
        let events = payload["data"]["events"].as_array().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["day_of_week"], "Monday");
        assert_eq!(events[0]["start"], "2024-09-02T10:00");
        assert_eq!(events[0]["end"], "2024-09-02T10:45");
    }
}
