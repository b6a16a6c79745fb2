
mod are_neighbor_cells;
mod cell_area_rads2;
mod cell_to_center_child;
mod cell_to_local_ij;
mod cell_to_parent;
mod cells_to_directed_edge;
mod degs_to_rads;
mod directed_edge_to_cells;
mod get_directed_edge_origin;
mod get_res0_cells;
mod great_circle_distance_m;
mod grid_path_cells;
mod grid_path_cells_size;
mod h3_to_string;
mod origin_to_directed_edges;
mod pentagon_count;
mod rads_to_degs;
mod res0_cell_count;
mod string_to_h3;
