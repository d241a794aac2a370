use serde_json::json;

/// Builds a `/foods/search` body with a self-consistent pagination block.
pub fn search_body(names: &[&str], page: u64, per_page: u64, total: u64) -> String {
    let total_pages = ((total + per_page - 1) / per_page).max(1);
    let foods = names
        .iter()
        .map(|name| {
            return json!({
                "id": name,
                "name": name,
                "region": "north",
                "description": format!("{name} is a beloved dish."),
            });
        })
        .collect::<Vec<_>>();

    return json!({
        "success": true,
        "foods": foods,
        "pagination": {
            "page": page,
            "per_page": per_page,
            "total": total,
            "total_pages": total_pages,
            "has_next": page < total_pages,
            "has_prev": page > 1,
        },
    })
    .to_string();
}

pub fn predict_success_body(name: &str, confidence: f64) -> String {
    return json!({
        "success": true,
        "food_name": name,
        "confidence": confidence,
        "food_info": {
            "name": name,
            "region": "north",
            "description": format!("{name} is a beloved dish."),
            "ingredients": ["rice noodles", "beef", "herbs"],
        },
        "related": ["bun_bo_hue", "banh_canh", "hu_tieu"],
    })
    .to_string();
}

pub fn predict_failure_body(error: &str) -> String {
    return json!({
        "success": false,
        "error": error,
    })
    .to_string();
}

pub fn auth_success_body(token: &str, username: &str) -> String {
    return json!({
        "success": true,
        "access_token": token,
        "token_type": "Bearer",
        "username": username,
    })
    .to_string();
}

pub fn auth_failure_body(message: &str) -> String {
    return json!({
        "success": false,
        "message": message,
    })
    .to_string();
}

pub fn history_body(entries: &[(&str, f64)], username: &str) -> String {
    let history = entries
        .iter()
        .enumerate()
        .map(|(idx, (name, confidence))| {
            return json!({
                "_id": format!("id-{idx}"),
                "food_name": name,
                "confidence": confidence,
                "timestamp": "2024-01-01T12:00:00",
            });
        })
        .collect::<Vec<_>>();

    return json!({
        "success": true,
        "history": history,
        "username": username,
    })
    .to_string();
}

pub fn detail_body(name: &str) -> String {
    return json!({
        "success": true,
        "food": {
            "name": name,
            "region": "north",
            "description": format!("{name} is a beloved dish."),
            "ingredients": ["rice noodles", "beef", "herbs"],
        },
    })
    .to_string();
}
