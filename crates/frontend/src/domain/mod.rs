pub mod a001_design_type;
pub mod a002_color;
pub mod a003_finishing;
pub mod a004_design;
pub mod a005_employee;
pub mod a006_distributor;
pub mod a007_location;
pub mod a008_area;
pub mod a009_area_assign;
pub mod a010_customer;
pub mod a011_brand;
pub mod a012_shift_time;
pub mod a013_door_part_size;
