mod car;
mod car_at_show;
mod owner;
mod show_ground;
