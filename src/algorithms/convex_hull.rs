pub mod quick_hull;
