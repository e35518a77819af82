pub mod column_resize;
