//! Tavola feed browser
//!
//! A terminal client for the Tavola restaurant-review API: an infinite-scroll
//! restaurant feed with rating filtering, restaurant details, reviews, and
//! owner replies.

mod command;
mod view;

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use tavola_client::adapters::{AccountClient, ApiClient, RestaurantsClient, ReviewsClient};
use tavola_client::config::Config;
use tavola_client::domain::entities::{Credentials, NewRestaurant, NewReview, NewUser};
use tavola_client::domain::ports::{AccountApi, RestaurantsApi, ReviewsApi};
use tavola_client::feed::{FeedController, FilterRange};
use tavola_client::session::SessionStore;

use command::{parse_command, Command, HELP};
use view::{print_details, render_feed, TerminalSink, Viewport};

/// Rows of the feed shown per screen
const VIEWPORT_HEIGHT: usize = 6;

/// Reviews fetched for a restaurant's detail view
const REVIEWS_SHOWN: usize = 9;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to stderr; stdout belongs to the feed.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    tracing::info!(api_url = %config.api_url, "starting tavola");

    let session = SessionStore::new();
    let api = Arc::new(ApiClient::new(&config.api_url, session.clone()));
    let restaurants = Arc::new(RestaurantsClient::new(api.clone()));
    let reviews = ReviewsClient::new(api.clone());
    let account = AccountClient::new(api.clone());

    // Log session transitions for as long as this receiver lives.
    let mut session_rx = session.subscribe();
    tokio::spawn(async move {
        while session_rx.changed().await.is_ok() {
            match &*session_rx.borrow_and_update() {
                Some(s) => tracing::info!(email = %s.email, role = %s.role, "logged in"),
                None => tracing::info!("logged out"),
            }
        }
    });

    let controller = FeedController::new(restaurants.clone(), Arc::new(TerminalSink), config.feed());
    let mut viewport = Viewport::new(VIEWPORT_HEIGHT);

    controller.initialize().await;
    let state = controller.state();
    viewport.set_total(state.items.len());
    render_feed(&state, &viewport);

    println!();
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let cmd = match parse_command(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::Down => {
                viewport.page_down();
                controller.on_scroll_threshold(viewport.ratio()).await;

                let state = controller.state();
                viewport.set_total(state.items.len());
                render_feed(&state, &viewport);
            }

            Command::Filter { min, max } => {
                match controller.on_filter_changed(FilterRange { min, max }).await {
                    Ok(()) => {
                        viewport.reset();
                        let state = controller.state();
                        viewport.set_total(state.items.len());
                        render_feed(&state, &viewport);
                    }
                    Err(e) => println!("{}", e),
                }
            }

            Command::Refresh => {
                // Re-running the current filter supersedes anything in flight.
                controller.on_filter_changed(controller.filter()).await.ok();
                viewport.reset();
                let state = controller.state();
                viewport.set_total(state.items.len());
                render_feed(&state, &viewport);
            }

            Command::Open { index } => {
                let Some(restaurant) = controller.state().items.get(index).cloned() else {
                    println!("no restaurant at index {}", index + 1);
                    continue;
                };

                let details = restaurants.get(&restaurant.id).await;
                let recent = reviews
                    .list_for_restaurant(&restaurant.id, REVIEWS_SHOWN, 0)
                    .await;
                match (details, recent) {
                    (Ok(details), Ok(recent)) => print_details(&details, &recent),
                    (Err(e), _) | (_, Err(e)) => println!("{}", e),
                }
            }

            Command::Review {
                index,
                rating,
                comment,
            } => {
                if session.current().is_none() {
                    println!("log in first");
                    continue;
                }
                let Some(restaurant) = controller.state().items.get(index).cloned() else {
                    println!("no restaurant at index {}", index + 1);
                    continue;
                };

                let review = NewReview {
                    restaurant_id: restaurant.id,
                    rating,
                    comment,
                };
                if let Err(e) = review.validate() {
                    println!("{}", e);
                    continue;
                }
                match reviews.create(&review).await {
                    Ok(created) => println!("review {} posted on {}", created.id, restaurant.name),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Answer { review_id, text } => {
                if !session.is_owner() {
                    println!("only owners can answer reviews");
                    continue;
                }
                match reviews.answer(&review_id.into(), &text).await {
                    Ok(answered) => println!("answered review by {}", answered.reviewer),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Add {
                name,
                city,
                address,
                img,
                description,
            } => {
                if !session.is_owner() {
                    println!("only owners can add restaurants");
                    continue;
                }

                let restaurant = NewRestaurant {
                    name,
                    city,
                    address,
                    img,
                    description,
                };
                if let Err(e) = restaurant.validate() {
                    println!("{}", e);
                    continue;
                }
                match restaurants.create(&restaurant).await {
                    Ok(created) => println!("added {} ({})", created.name, created.id),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Login { email, password } => {
                match account.login(&Credentials { email, password }).await {
                    Ok(s) => println!("welcome back, {}", s.email),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Register {
                email,
                password,
                is_owner,
            } => {
                let user = NewUser {
                    email,
                    password: password.clone(),
                    confirm_password: password,
                    is_owner,
                };
                if let Err(e) = user.validate() {
                    println!("{}", e);
                    continue;
                }
                match account.register(&user).await {
                    Ok(()) => println!("registered - check your inbox, then log in"),
                    Err(e) => println!("{}", e),
                }
            }

            Command::Logout => {
                session.clear();
                println!("logged out");
            }

            Command::Help => println!("{}", HELP),

            Command::Quit => break,
        }
    }

    Ok(())
}
