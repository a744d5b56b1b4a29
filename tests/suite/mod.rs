mod keys;
mod lecture;
mod live_view;
